//! Built-in sample portfolios.

use async_trait::async_trait;
use serde_json::json;

use prism_core::records::{PortfolioListing, RawHolding, RawPortfolio};
use prism_traits::error::TraitError;
use prism_traits::store::{PortfolioStore, SourceInfo, SourceKind};

/// Message reported by [`FallbackStore::source`].
pub const FALLBACK_MESSAGE: &str =
    "Azure environment variables missing. Serving fallback sample portfolio.";

// =============================================================================
// SAMPLE DATA
// =============================================================================

fn sample_holding(
    name: &str,
    weight: f64,
    categories: [&str; 4],
    scores: [f64; 5],
) -> RawHolding {
    let [currency, region, sector, asset_class] = categories;
    let [value, quality, momentum, size, volatility] = scores;
    RawHolding {
        name: Some(json!(name)),
        weight: Some(json!(weight)),
        currency: Some(json!(currency)),
        region: Some(json!(region)),
        sector: Some(json!(sector)),
        asset_class: Some(json!(asset_class)),
        value: Some(json!(value)),
        quality: Some(json!(quality)),
        momentum: Some(json!(momentum)),
        size: Some(json!(size)),
        volatility: Some(json!(volatility)),
    }
}

/// The "Growth Model" sample portfolio.
#[must_use]
pub fn growth_model() -> RawPortfolio {
    RawPortfolio {
        id: Some(json!("growth-model")),
        name: Some(json!("Growth Model")),
        as_of: Some(json!("2026-01-31")),
        holdings: Some(vec![
            sample_holding(
                "US Tech ETF",
                30.0,
                ["USD", "North America", "Technology", "Equity"],
                [-0.2, 0.6, 0.8, 0.7, 0.4],
            ),
            sample_holding(
                "Europe Financials",
                15.0,
                ["EUR", "Europe", "Financials", "Equity"],
                [0.6, 0.2, 0.1, -0.2, 0.0],
            ),
            sample_holding(
                "EM Equity",
                20.0,
                ["USD", "Emerging Markets", "Industrials", "Equity"],
                [0.4, -0.2, 0.3, -0.4, 0.5],
            ),
            sample_holding(
                "Global Bonds",
                25.0,
                ["USD", "Other", "Other", "Fixed Income"],
                [0.2, 0.3, -0.3, 0.0, -0.7],
            ),
            sample_holding(
                "Cash",
                10.0,
                ["EUR", "Europe", "Other", "Cash"],
                [0.0, 0.0, 0.0, 0.0, -0.2],
            ),
        ]),
    }
}

// =============================================================================
// FALLBACK STORE
// =============================================================================

/// In-memory store serving a fixed list of portfolios.
///
/// Used when no remote store is configured.
#[derive(Debug, Clone)]
pub struct FallbackStore {
    portfolios: Vec<RawPortfolio>,
}

impl FallbackStore {
    /// Creates the store with the built-in samples.
    #[must_use]
    pub fn new() -> Self {
        Self::with_portfolios(vec![growth_model()])
    }

    /// Creates the store with custom documents.
    #[must_use]
    pub fn with_portfolios(portfolios: Vec<RawPortfolio>) -> Self {
        Self { portfolios }
    }

    fn find(&self, id: &str) -> Option<&RawPortfolio> {
        self.portfolios
            .iter()
            .find(|p| p.document_id().as_deref() == Some(id))
    }
}

impl Default for FallbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioStore for FallbackStore {
    fn source(&self) -> SourceInfo {
        SourceInfo::new(SourceKind::FallbackLocal).with_detail("message", FALLBACK_MESSAGE)
    }

    async fn list_portfolios(&self) -> Result<Vec<PortfolioListing>, TraitError> {
        Ok(self
            .portfolios
            .iter()
            .map(|p| p.listing("", ""))
            .collect())
    }

    async fn fetch_portfolio(&self, id: &str) -> Result<RawPortfolio, TraitError> {
        tracing::debug!(id, "fetching fallback portfolio");
        self.find(id)
            .cloned()
            .ok_or_else(|| TraitError::not_found(format!("Fallback portfolio '{id}' not found.")))
    }
}
