//! Asset class buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, Dimension};
use crate::error::CoreError;

/// Asset class of a holding.
///
/// Unlike the other dimensions the fallback is [`AssetClass::Alternatives`]:
/// anything that cannot be placed is treated as an alternative sleeve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum AssetClass {
    /// Listed equity
    #[default]
    Equity,
    /// Bonds and other fixed income
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    /// Real estate, infrastructure, commodities
    #[serde(rename = "Real Assets")]
    RealAssets,
    /// Cash and equivalents
    Cash,
    /// Hedge funds, private markets, unclassified
    Alternatives,
}

impl Category for AssetClass {
    const DIMENSION: Dimension = Dimension::AssetClass;
    const ALL: &'static [Self] = &[
        AssetClass::Equity,
        AssetClass::FixedIncome,
        AssetClass::RealAssets,
        AssetClass::Cash,
        AssetClass::Alternatives,
    ];
    const FALLBACK: Self = AssetClass::Alternatives;

    fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::RealAssets => "Real Assets",
            AssetClass::Cash => "Cash",
            AssetClass::Alternatives => "Alternatives",
        }
    }
}

impl FromStr for AssetClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::unknown_category("assetClass", s))
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
