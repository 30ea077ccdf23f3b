//! Style factors scored on every holding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A style factor.
///
/// Factor scores are standardised and live in `[-1.5, 1.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    /// Cheapness relative to fundamentals
    Value,
    /// Profitability and balance-sheet strength
    Quality,
    /// Trailing price trend
    Momentum,
    /// Market capitalisation tilt
    Size,
    /// Realised volatility
    Volatility,
}

impl Factor {
    /// All factors in display order.
    pub const ALL: [Factor; 5] = [
        Factor::Value,
        Factor::Quality,
        Factor::Momentum,
        Factor::Size,
        Factor::Volatility,
    ];

    /// Lower bound of a factor score.
    pub const MIN_SCORE: f64 = -1.5;

    /// Upper bound of a factor score.
    pub const MAX_SCORE: f64 = 1.5;

    /// Returns the record field key (`"value"`, `"quality"`, ...).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Factor::Value => "value",
            Factor::Quality => "quality",
            Factor::Momentum => "momentum",
            Factor::Size => "size",
            Factor::Volatility => "volatility",
        }
    }

    /// Returns the capitalised display name.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Factor::Value => "Value",
            Factor::Quality => "Quality",
            Factor::Momentum => "Momentum",
            Factor::Size => "Size",
            Factor::Volatility => "Volatility",
        }
    }

    /// Looks up a factor by its record key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Returns the factor's position in [`Factor::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Factor::Value => 0,
            Factor::Quality => 1,
            Factor::Momentum => 2,
            Factor::Size => 3,
            Factor::Volatility => 4,
        }
    }
}

impl FromStr for Factor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CoreError::UnknownFactor(s.to_string()))
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, factor) in Factor::ALL.iter().enumerate() {
            assert_eq!(factor.index(), i);
        }
    }

    #[test]
    fn test_keys_and_titles() {
        assert_eq!(Factor::Momentum.key(), "momentum");
        assert_eq!(Factor::Momentum.title(), "Momentum");
        assert_eq!(Factor::from_key("size"), Some(Factor::Size));
        assert_eq!(Factor::from_key("Size"), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Factor::Volatility).unwrap();
        assert_eq!(json, "\"volatility\"");
    }
}
