//! Error types for Prism core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when constructing core types from strict input.
///
/// The lenient constructors (`parse_or_fallback`, `coerce_number`) never
/// produce these; they exist for callers that want to reject bad labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A label is not a member of the dimension's enumeration.
    #[error("Unknown {dimension} '{value}'")]
    UnknownCategory {
        /// The dimension key (e.g. `"currency"`).
        dimension: &'static str,
        /// The rejected label.
        value: String,
    },

    /// A label is not one of the known style factors.
    #[error("Unknown factor '{0}'")]
    UnknownFactor(String),

    /// A date string could not be parsed.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Create an unknown category error.
    #[must_use]
    pub fn unknown_category(dimension: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            dimension,
            value: value.into(),
        }
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
