//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A holding edit could not be parsed.
    #[error("Invalid edit '{0}'. Use INDEX.FIELD=VALUE, e.g. 0.weight=25.")]
    InvalidEdit(String),

    /// Portfolio document could not be read.
    #[error("Cannot read portfolio file {path}: {message}")]
    PortfolioFile {
        /// File that failed.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
