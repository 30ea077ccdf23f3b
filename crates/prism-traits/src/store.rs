//! Portfolio store traits.
//!
//! A store lists available portfolios and fetches one by id. What it
//! returns is untrusted: callers normalize holdings before use.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use prism_core::records::{PortfolioListing, RawPortfolio};
use serde::{Deserialize, Serialize};

use crate::error::TraitError;

// =============================================================================
// SOURCE INFO
// =============================================================================

/// Kind of backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Built-in sample portfolios.
    FallbackLocal,
    /// A local directory of portfolio JSON files.
    LocalDirectory,
    /// An Azure Data Lake Gen2 directory.
    AzureDatalake,
}

impl SourceKind {
    /// Wire identifier, e.g. `"azure-datalake"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::FallbackLocal => "fallback-local",
            SourceKind::LocalDirectory => "local-directory",
            SourceKind::AzureDatalake => "azure-datalake",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which store is active and how it is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Store kind.
    pub source: SourceKind,
    /// Free-form details (account, directory, message, ...).
    pub details: BTreeMap<String, String>,
}

impl SourceInfo {
    /// Creates source info without details.
    #[must_use]
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            details: BTreeMap::new(),
        }
    }

    /// Adds one detail entry.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns a detail value.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

// =============================================================================
// PORTFOLIO STORE
// =============================================================================

/// Source of portfolio documents.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Describes the store.
    fn source(&self) -> SourceInfo;

    /// Lists the available portfolios.
    async fn list_portfolios(&self) -> Result<Vec<PortfolioListing>, TraitError>;

    /// Fetches one portfolio document by id.
    ///
    /// Unknown ids fail with [`TraitError::NotFound`].
    async fn fetch_portfolio(&self, id: &str) -> Result<RawPortfolio, TraitError>;
}

#[async_trait]
impl<T: PortfolioStore + ?Sized> PortfolioStore for Box<T> {
    fn source(&self) -> SourceInfo {
        (**self).source()
    }

    async fn list_portfolios(&self) -> Result<Vec<PortfolioListing>, TraitError> {
        (**self).list_portfolios().await
    }

    async fn fetch_portfolio(&self, id: &str) -> Result<RawPortfolio, TraitError> {
        (**self).fetch_portfolio(id).await
    }
}
