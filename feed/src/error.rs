//! Error types for the feed crate
//!
//! This module defines error types for each layer:
//! - `FetchError`: Review API adapter errors
//! - `FetchFailure`: The single failure kind the feed controller records
//! - `ConfigError`: Environment configuration errors
//! - `SessionError`: Errors talking to a running feed session

use serde::Serialize;
use thiserror::Error;

/// Paged fetch errors raised by adapters
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Build an error from a non-success HTTP status
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => FetchError::Unauthorized,
            _ => FetchError::Api { status, message },
        }
    }
}

/// A failed page fetch as seen by the controller.
///
/// The controller never inspects the cause; it only keeps the reason so the
/// rendering layer can show or log it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("Fetch failed: {reason}")]
pub struct FetchFailure {
    pub reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<FetchError> for FetchFailure {
    fn from(e: FetchError) -> Self {
        FetchFailure::new(e.to_string())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Feed session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Feed session has shut down")]
    Closed,
}
