//! Error types for the preflight checker.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the preflight checker.
///
/// Only fatal conditions become error values. Missing optional variables,
/// missing individual collections, and URL-scheme advisories are reported
/// through the [`Reporter`](crate::report::Reporter) and never abort a run.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Missing required configuration: {}", .0.join(", "))]
    ConfigurationMissing(Vec<String>),

    // Remote dependency errors
    #[error("Telegram bot unreachable: {0}")]
    BotUnreachable(String),

    #[error("Database unreachable: {0}")]
    DatabaseUnreachable(String),

    #[error("Request timed out: {0}")]
    TimeoutExceeded(String),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
