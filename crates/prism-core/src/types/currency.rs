//! Currency buckets tracked by the allocation view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, Dimension};
use crate::error::CoreError;

/// Denomination currency of a holding.
///
/// Only the major reserve currencies are tracked individually; everything
/// else lands in [`Currency::Other`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Any other currency
    Other,
}

impl Currency {
    /// Returns the 3-letter code, or `"Other"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::Other => "Other",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "United States Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound Sterling",
            Currency::JPY => "Japanese Yen",
            Currency::Other => "Other currencies",
        }
    }
}

impl Category for Currency {
    const DIMENSION: Dimension = Dimension::Currency;
    const ALL: &'static [Self] = &[
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::Other,
    ];
    const FALLBACK: Self = Currency::Other;

    fn label(&self) -> &'static str {
        self.code()
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::unknown_category("currency", s))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
