use reqwest::header::HeaderMap;
use serde::Deserialize;
use snafu::Snafu;
use std::fmt;
use url::Url;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when talking to the Genderize API
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The configured server address could not be parsed.
    #[snafu(display("invalid base url '{base_url}'"))]
    InvalidBaseUrl {
        source: url::ParseError,
        base_url: String,
    },

    /// Connection, TLS or timeout failure reported by the HTTP transport.
    #[snafu(display("failed to perform request to '{url}'"))]
    PerformRequest { source: reqwest::Error, url: Url },

    #[snafu(display("failed to read response body"))]
    ReadResponse { source: reqwest::Error },

    /// The server answered with a success status but the body was not valid JSON.
    #[snafu(display("failed to deserialize gender records"))]
    Deserialize { source: serde_json::Error },

    /// The server answered with a non-success status.
    #[snafu(display("server rejected the request with status {}", source.status_code))]
    Server { source: ServerError },

    /// A batch reply did not carry one record per submitted name.
    #[snafu(display("expected {expected} records in batch reply, got {actual}"))]
    ResponseLength { expected: usize, actual: usize },
}

impl Error {
    /// Returns the server error if the API rejected the request.
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            Error::Server { source } => Some(source),
            _ => None,
        }
    }

    /// Returns the quota snapshot attached to a server error, if any.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        self.server_error()
            .and_then(|error| error.rate_limit.as_ref())
    }
}

/// A non-success reply from the Genderize API.
///
/// Both the message and the rate limit are decoded on a best-effort basis:
/// a body that is not `{"error": "..."}` yields an empty message, and the
/// rate limit is only present when all three quota headers parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// Message from the `error` field of the reply body.
    pub message: String,
    /// HTTP status code of the reply.
    pub status_code: u16,
    /// Quota counters reported alongside the error.
    pub rate_limit: Option<RateLimit>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ServerError {
    pub(crate) fn new(status_code: u16, headers: &HeaderMap, body: Option<&[u8]>) -> Self {
        Self {
            message: body.and_then(Self::message_from_body).unwrap_or_default(),
            status_code,
            rate_limit: RateLimit::from_headers(headers),
        }
    }

    pub(crate) fn message_from_body(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServerError {}

/// API quota counters taken from the rate limit headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// The number of names allotted for the current time window.
    pub limit: i64,
    /// The number of names left in the current time window.
    pub remaining: i64,
    /// Seconds remaining until a new time window opens.
    pub reset: i64,
}

pub(crate) const RATE_LIMIT_LIMIT: &str = "x-rate-limit-limit";
pub(crate) const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";
pub(crate) const RATE_RESET: &str = "x-rate-reset";

impl RateLimit {
    /// Parses the quota headers, returning `None` unless all three are valid integers.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let parse = |name: &str| -> Option<i64> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        };

        Some(Self {
            limit: parse(RATE_LIMIT_LIMIT)?,
            remaining: parse(RATE_LIMIT_REMAINING)?,
            reset: parse(RATE_RESET)?,
        })
    }
}
