//! # genderize-rust
//!
//! A Rust client library for the [Genderize.io](https://genderize.io) API,
//! which estimates the gender of a person from their first name.
//!
//! ```no_run
//! use genderize::{Genderize, Query};
//!
//! # async fn example() -> Result<(), genderize::Error> {
//! // shared default client, no API key
//! let responses = genderize::get(["James", "Eva", "Thunderhorse"]).await?;
//!
//! // explicit client with country and language hints
//! let client = Genderize::with_api_key("API_KEY")?;
//! let responses = client
//!     .get(Query::new(["Kim"]).with_country_id("dk").with_language_id("da"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Queries of any length are accepted; they are split into requests of at most
//! [`BATCH_SIZE`] names and the replies come back in the original order.

mod batch;
mod client;
mod common;
mod error;
mod models;
pub mod prelude;


pub use batch::BATCH_SIZE;
pub use client::{get, Config, Genderize, GenderizeBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{Error, RateLimit, Result, ServerError};
pub use models::{Gender, Query, Response};
