//! Error types for portfolio analytics.
//!
//! The analytics themselves are total; only session commands that address a
//! holding by index or a field by key can fail.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio session commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A command addressed a holding that does not exist.
    #[error("Holding index {index} out of range (portfolio has {len} holdings)")]
    HoldingIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of holdings at the time of the command.
        len: usize,
    },

    /// An edit named a field that holdings do not have.
    #[error("Unknown holding field: {field}")]
    UnknownField {
        /// The rejected field key.
        field: String,
    },
}

impl PortfolioError {
    /// Create an out-of-range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::HoldingIndexOutOfRange { index, len }
    }

    /// Create an unknown field error.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::index_out_of_range(7, 3);
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains("3 holdings"));

        let err = PortfolioError::unknown_field("duration");
        assert_eq!(err.to_string(), "Unknown holding field: duration");
    }

    #[test]
    fn test_error_clone() {
        let err = PortfolioError::unknown_field("x");
        assert_eq!(err.clone(), err);
    }
}
