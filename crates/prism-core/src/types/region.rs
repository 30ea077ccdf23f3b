//! Geographic region buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, Dimension};
use crate::error::CoreError;

/// Geographic region of a holding's exposure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Region {
    /// United States and Canada
    #[default]
    #[serde(rename = "North America")]
    NorthAmerica,
    /// Developed Europe
    Europe,
    /// Developed Asia Pacific
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    /// Emerging markets
    #[serde(rename = "Emerging Markets")]
    EmergingMarkets,
    /// Unclassified or global
    Other,
}

impl Category for Region {
    const DIMENSION: Dimension = Dimension::Region;
    const ALL: &'static [Self] = &[
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::EmergingMarkets,
        Region::Other,
    ];
    const FALLBACK: Self = Region::Other;

    fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
            Region::EmergingMarkets => "Emerging Markets",
            Region::Other => "Other",
        }
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::unknown_category("region", s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_serde() {
        for region in Region::ALL {
            let json = serde_json::to_string(region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.label()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Asia Pacific".parse::<Region>(), Ok(Region::AsiaPacific));
        assert!("AsiaPacific".parse::<Region>().is_err());
    }
}
