//! # Prelude for the Genderize Rust Crate
//!
//! This module re-exports the most commonly used types for convenience.
//!
//! ```rust,ignore
//! use genderize::prelude::*;
//! ```

pub use crate::client::{Config, Genderize, GenderizeBuilder};
pub use crate::error::{Error as GenderizeError, RateLimit, ServerError};
pub use crate::models::{Gender, Query, Response};
