//! Weighted style-factor exposure.

use prism_core::numeric::round_dp;
use prism_core::Factor;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::bucketing::total_weight;
use crate::types::Holding;

/// Portfolio-wide exposure per style factor, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactorExposure {
    scores: [f64; 5],
}

impl FactorExposure {
    /// Returns the exposure to a factor.
    #[must_use]
    pub fn get(&self, factor: Factor) -> f64 {
        self.scores[factor.index()]
    }

    /// Iterates `(factor, exposure)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Serialize for FactorExposure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Factor::ALL.len()))?;
        for (factor, exposure) in self.iter() {
            map.serialize_entry(factor.key(), &exposure)?;
        }
        map.end()
    }
}

/// Computes the weight-weighted average score of every factor.
///
/// Each factor is `Σ(weight_i * score_i / total_weight)`, rounded to 2
/// decimals. A zero total weight is replaced by 1 so that an empty or
/// all-zero-weight portfolio has zero exposure.
///
/// # Example
///
/// ```rust
/// use prism_portfolio::prelude::*;
///
/// let holdings = vec![
///     Holding::builder("A").weight(75.0).factor(Factor::Quality, 1.0).build(),
///     Holding::builder("B").weight(25.0).factor(Factor::Quality, -1.0).build(),
/// ];
/// let exposure = factor_exposure(&holdings);
/// assert_eq!(exposure.get(Factor::Quality), 0.5);
/// ```
#[must_use]
pub fn factor_exposure(holdings: &[Holding]) -> FactorExposure {
    let total = total_weight(holdings);
    let divisor = if total == 0.0 { 1.0 } else { total };

    let mut scores = [0.0; 5];
    for factor in Factor::ALL {
        let weighted: f64 = holdings
            .iter()
            .map(|h| h.weight() * h.factor(factor) / divisor)
            .sum();
        scores[factor.index()] = round_dp(weighted, 2);
    }
    FactorExposure { scores }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FactorScores;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_portfolio_has_zero_exposure() {
        let exposure = factor_exposure(&[]);
        assert_eq!(exposure, FactorExposure::default());
    }

    #[test]
    fn test_zero_weight_portfolio_has_zero_exposure() {
        let holdings = vec![Holding::builder("Idle")
            .factors(FactorScores::uniform(1.5))
            .build()];
        let exposure = factor_exposure(&holdings);
        assert!(exposure.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_divides_by_actual_total_not_100() {
        let holdings = vec![Holding::builder("Half")
            .weight(50.0)
            .factor(Factor::Momentum, 0.8)
            .build()];
        assert_relative_eq!(factor_exposure(&holdings).get(Factor::Momentum), 0.8);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let holdings = vec![
            Holding::builder("A").weight(1.0).factor(Factor::Size, 1.0).build(),
            Holding::builder("B").weight(2.0).build(),
        ];
        assert_relative_eq!(factor_exposure(&holdings).get(Factor::Size), 0.33);
    }

    #[test]
    fn test_serializes_by_factor_key() {
        let holdings = vec![Holding::builder("A")
            .weight(100.0)
            .factor(Factor::Volatility, -0.4)
            .build()];
        let json = serde_json::to_value(factor_exposure(&holdings)).unwrap();
        assert_eq!(json["volatility"], -0.4);
        assert_eq!(json["value"], 0.0);
    }
}
