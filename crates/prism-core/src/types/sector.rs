//! Industry sector buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, Dimension};
use crate::error::CoreError;

/// Industry sector of a holding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Sector {
    /// Information technology
    #[default]
    Technology,
    /// Banks, insurers, diversified financials
    Financials,
    /// Pharma, biotech, providers
    Healthcare,
    /// Capital goods, transport
    Industrials,
    /// Consumer discretionary and staples
    Consumer,
    /// Oil, gas, energy equipment
    Energy,
    /// Everything else (including non-equity sleeves)
    Other,
}

impl Category for Sector {
    const DIMENSION: Dimension = Dimension::Sector;
    const ALL: &'static [Self] = &[
        Sector::Technology,
        Sector::Financials,
        Sector::Healthcare,
        Sector::Industrials,
        Sector::Consumer,
        Sector::Energy,
        Sector::Other,
    ];
    const FALLBACK: Self = Sector::Other;

    fn label(&self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Financials => "Financials",
            Sector::Healthcare => "Healthcare",
            Sector::Industrials => "Industrials",
            Sector::Consumer => "Consumer",
            Sector::Energy => "Energy",
            Sector::Other => "Other",
        }
    }
}

impl FromStr for Sector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::unknown_category("sector", s))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
