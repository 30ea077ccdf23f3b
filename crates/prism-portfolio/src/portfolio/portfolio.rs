//! Portfolio struct and core methods.

use chrono::NaiveDate;
use prism_core::records::{parse_as_of, PortfolioListing, RawPortfolio};
use serde::Serialize;

use crate::normalizer::normalize_holdings;
use crate::types::Holding;

/// A normalized portfolio: identity metadata plus ordered holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Identity metadata (`id`, `name`, `asOf`).
    #[serde(flatten)]
    pub listing: PortfolioListing,

    /// Holdings in document order.
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates a portfolio from metadata and already normalized holdings.
    #[must_use]
    pub fn new(listing: PortfolioListing, holdings: Vec<Holding>) -> Self {
        Self { listing, holdings }
    }

    /// Normalizes a raw portfolio document.
    ///
    /// `fallback_id` stands in for a missing `id` and `name`. An absent
    /// holdings list yields an empty portfolio.
    #[must_use]
    pub fn from_raw(raw: &RawPortfolio, fallback_id: &str) -> Self {
        Self {
            listing: raw.listing(fallback_id, fallback_id),
            holdings: normalize_holdings(raw.holdings()),
        }
    }

    /// Portfolio identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.listing.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.listing.name
    }

    /// As-of date, if the label is a valid `YYYY-MM-DD` date.
    #[must_use]
    pub fn as_of_date(&self) -> Option<NaiveDate> {
        parse_as_of(&self.listing.as_of).ok()
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
