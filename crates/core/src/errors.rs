//! Core error types for the production queue dashboard.
//!
//! Store-specific failures are kept in [`StoreError`] so callers can tell
//! transient fetch problems (retained state, retry on next cycle) apart from
//! terminal ones. Nothing in this crate is treated as fatal.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Change feed failed: {0}")]
    Feed(String),

    #[error("Video metadata lookup failed: {0}")]
    Metadata(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors from the external data store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected the request with an error status.
    #[error("Store returned status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The store rate limited the request (HTTP 429).
    #[error("Rate limited by store")]
    RateLimited,

    /// No settings record exists yet.
    #[error("No display settings record found")]
    SettingsNotFound,

    /// The response body did not match the expected shape.
    #[error("Failed to parse store response: {0}")]
    Malformed(String),

    /// A network error occurred while talking to the store.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl StoreError {
    /// Whether the failure is worth retrying on the next refresh cycle.
    ///
    /// Transient failures keep the previous item set on screen; terminal
    /// ones do too, but are worth surfacing louder in logs.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited | Self::Network(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::SettingsNotFound | Self::Malformed(_) => false,
        }
    }
}

/// Validation errors for data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
