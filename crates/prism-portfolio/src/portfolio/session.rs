//! Explicit analysis session.
//!
//! A [`PortfolioSession`] owns the holdings under analysis and applies
//! commands to them. Every command that changes the holdings returns the
//! freshly recomputed [`PortfolioAnalysis`]; nothing is cached between
//! commands.
//!
//! # Example
//!
//! ```rust
//! use prism_portfolio::prelude::*;
//! use serde_json::json;
//!
//! let mut session = PortfolioSession::new(AnalyticsConfig::default());
//! session.add_holding();
//! let analysis = session.update_field_by_key(0, "weight", &json!(100))?;
//! assert_eq!(analysis.total_weight, 100.0);
//!
//! let analysis = session.remove_holding(0)?;
//! assert_eq!(analysis.holding_count, 0);
//! # Ok::<(), prism_portfolio::PortfolioError>(())
//! ```

use prism_core::records::{PortfolioListing, RawPortfolio};
use serde_json::Value;

use super::Portfolio;
use crate::analytics::PortfolioAnalysis;
use crate::error::{PortfolioError, PortfolioResult};
use crate::normalizer::apply_field;
use crate::types::{AnalyticsConfig, Holding, HoldingField};

/// In-memory holdings plus the configuration used to analyse them.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSession {
    config: AnalyticsConfig,
    listing: Option<PortfolioListing>,
    holdings: Vec<Holding>,
}

impl PortfolioSession {
    /// Creates an empty session with no portfolio selected.
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            listing: None,
            holdings: Vec::new(),
        }
    }

    /// Analytics configuration in use.
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Replaces the analytics configuration.
    pub fn set_config(&mut self, config: AnalyticsConfig) -> PortfolioAnalysis {
        self.config = config;
        self.snapshot()
    }

    /// Metadata of the loaded portfolio, `None` when nothing is selected.
    #[must_use]
    pub fn listing(&self) -> Option<&PortfolioListing> {
        self.listing.as_ref()
    }

    /// Current holdings in order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Returns one holding.
    #[must_use]
    pub fn holding(&self, index: usize) -> Option<&Holding> {
        self.holdings.get(index)
    }

    /// Replaces the whole session state with `portfolio`.
    pub fn load(&mut self, portfolio: Portfolio) -> PortfolioAnalysis {
        tracing::debug!(
            id = %portfolio.listing.id,
            holdings = portfolio.holdings.len(),
            "portfolio loaded into session"
        );
        self.listing = Some(portfolio.listing);
        self.holdings = portfolio.holdings;
        self.snapshot()
    }

    /// Normalizes a raw document and loads it.
    pub fn load_raw(&mut self, raw: &RawPortfolio, fallback_id: &str) -> PortfolioAnalysis {
        self.load(Portfolio::from_raw(raw, fallback_id))
    }

    /// Drops the loaded portfolio and all holdings.
    pub fn clear(&mut self) -> PortfolioAnalysis {
        tracing::debug!("session cleared");
        self.listing = None;
        self.holdings.clear();
        self.snapshot()
    }

    /// Appends the template holding.
    pub fn add_holding(&mut self) -> PortfolioAnalysis {
        self.push_holding(Holding::template())
    }

    /// Appends a specific holding.
    pub fn push_holding(&mut self, holding: Holding) -> PortfolioAnalysis {
        self.holdings.push(holding);
        tracing::debug!(holdings = self.holdings.len(), "holding added");
        self.snapshot()
    }

    /// Removes the holding at `index`.
    ///
    /// An out-of-range index leaves the session unchanged.
    pub fn remove_holding(&mut self, index: usize) -> PortfolioResult<PortfolioAnalysis> {
        self.check_index(index)?;
        let removed = self.holdings.remove(index);
        tracing::debug!(index, name = removed.name(), "holding removed");
        Ok(self.snapshot())
    }

    /// Edits one field of one holding, revalidating the value with the
    /// normalizer's rule for that field.
    pub fn update_field(
        &mut self,
        index: usize,
        field: HoldingField,
        value: &Value,
    ) -> PortfolioResult<PortfolioAnalysis> {
        let len = self.holdings.len();
        let holding = self
            .holdings
            .get_mut(index)
            .ok_or_else(|| PortfolioError::index_out_of_range(index, len))?;
        apply_field(holding, field, value);
        tracing::debug!(index, %field, "holding field updated");
        Ok(self.snapshot())
    }

    /// Like [`update_field`](Self::update_field) with the field given by its
    /// record key (`"weight"`, `"assetClass"`, `"momentum"`, ...).
    pub fn update_field_by_key(
        &mut self,
        index: usize,
        key: &str,
        value: &Value,
    ) -> PortfolioResult<PortfolioAnalysis> {
        let field: HoldingField = key.parse()?;
        self.update_field(index, field, value)
    }

    /// Computes the full derived state of the current holdings.
    #[must_use]
    pub fn snapshot(&self) -> PortfolioAnalysis {
        PortfolioAnalysis::calculate(&self.holdings, &self.config)
    }

    /// Returns the current state as a portfolio, if one is selected.
    #[must_use]
    pub fn portfolio(&self) -> Option<Portfolio> {
        self.listing
            .as_ref()
            .map(|listing| Portfolio::new(listing.clone(), self.holdings.clone()))
    }

    fn check_index(&self, index: usize) -> PortfolioResult<()> {
        if index < self.holdings.len() {
            Ok(())
        } else {
            Err(PortfolioError::index_out_of_range(index, self.holdings.len()))
        }
    }
}
