//! The [`Category`] trait shared by every categorical dimension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A categorical dimension holdings are bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Denomination currency.
    Currency,
    /// Geographic region.
    Region,
    /// Industry sector.
    Sector,
    /// Asset class.
    AssetClass,
}

impl Dimension {
    /// All dimensions in display order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Currency,
        Dimension::Region,
        Dimension::Sector,
        Dimension::AssetClass,
    ];

    /// Returns the record field key (`"currency"`, `"assetClass"`, ...).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Currency => "currency",
            Dimension::Region => "region",
            Dimension::Sector => "sector",
            Dimension::AssetClass => "assetClass",
        }
    }

    /// Returns a human-readable title for the dimension.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Currency => "Currency",
            Dimension::Region => "Region",
            Dimension::Sector => "Sector",
            Dimension::AssetClass => "Asset-class",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A closed enumeration with a mandatory fallback member.
///
/// Implementors list their members in display order in [`Category::ALL`];
/// aggregation results iterate that order, so it is part of the contract.
pub trait Category:
    Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The dimension this enumeration describes.
    const DIMENSION: Dimension;

    /// Every member, in display order.
    const ALL: &'static [Self];

    /// Member substituted for absent or unrecognised labels.
    const FALLBACK: Self;

    /// Returns the canonical label (exact, case-sensitive).
    fn label(&self) -> &'static str;

    /// Looks up a member by its exact label.
    #[must_use]
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Looks up a member by label, substituting [`Category::FALLBACK`].
    #[must_use]
    fn parse_or_fallback(label: Option<&str>) -> Self {
        label.and_then(Self::from_label).unwrap_or(Self::FALLBACK)
    }

    /// Returns the member's position in [`Category::ALL`].
    #[must_use]
    fn ordinal(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len())
    }
}
