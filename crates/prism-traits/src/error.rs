//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type TraitResult<T> = Result<T, TraitError>;

/// Common error type for store operations.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Requested portfolio not found
    #[error("{0}")]
    NotFound(String),

    /// Remote service answered with a non-success status
    #[error("{service} request failed ({status}): {body}")]
    RequestFailed {
        /// Service name used in the message, e.g. "Azure".
        service: &'static str,
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// Connection to external service failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Store is not configured correctly
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Maximum number of body characters kept in [`TraitError::RequestFailed`].
pub const ERROR_BODY_LIMIT: usize = 300;

impl TraitError {
    /// Create a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a request-failed error, keeping the first
    /// [`ERROR_BODY_LIMIT`] characters of `body`.
    #[must_use]
    pub fn request_failed(service: &'static str, status: u16, body: &str) -> Self {
        Self::RequestFailed {
            service,
            status,
            body: body.chars().take(ERROR_BODY_LIMIT).collect(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for TraitError {
    fn from(e: serde_json::Error) -> Self {
        TraitError::ParseError(e.to_string())
    }
}
