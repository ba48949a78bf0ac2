//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (DNS, connection refused, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status other than 401
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Client-side validation failed; no request was issued
    #[error("{0}")]
    Validation(String),

    /// A domain action was invoked without an authenticated identity
    #[error("No user is logged in")]
    NotLoggedIn,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True for errors that count as a failed transport attempt and are
    /// eligible for retry. Validation and session errors never reach the
    /// network; they are not retriable by definition.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_) | ClientError::Json(_) | ClientError::Server { .. }
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
