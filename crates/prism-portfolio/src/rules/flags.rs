//! Deviation rule engine.

use prism_core::numeric::{format_fixed, format_signed};
use prism_core::{AssetClass, Category};
use serde::Serialize;
use std::fmt;

use crate::analytics::{factor_exposure, FactorExposure};
use crate::benchmark::Benchmark;
use crate::bucketing::{aggregate_by_dimension, total_weight, Bucketed, Distribution};
use crate::types::{DeviationThresholds, Holding};

/// Message emitted when no rule fires.
pub const ALIGNED_MESSAGE: &str = "No material deviations detected. Portfolio is aligned with targets.";

/// Which rule produced a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagKind {
    /// Total weight is away from 100%.
    TotalWeight,
    /// An asset class deviates from the model portfolio.
    Allocation,
    /// A factor exposure deviates from the model portfolio.
    Factor,
    /// Informational: nothing else fired.
    Aligned,
}

/// A human-readable deviation alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviationFlag {
    /// Rule that produced the flag.
    pub kind: FlagKind,
    /// Alert text.
    pub message: String,
}

impl DeviationFlag {
    fn new(kind: FlagKind, message: String) -> Self {
        Self { kind, message }
    }

    /// Returns true for the informational "aligned" flag.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.kind == FlagKind::Aligned
    }
}

impl fmt::Display for DeviationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Evaluates all deviation rules against the model portfolio.
///
/// Rules run in order and append to the list:
///
/// 1. `|total weight - 100| > thresholds.total_weight`
/// 2. each model asset class with `|actual - target| > thresholds.asset_class`
/// 3. each factor with `|exposure - target| > thresholds.factor`
/// 4. the "aligned" flag if nothing above fired
///
/// The result is never empty.
#[must_use]
pub fn evaluate_flags(holdings: &[Holding], thresholds: &DeviationThresholds) -> Vec<DeviationFlag> {
    evaluate_flags_from(
        total_weight(holdings),
        &aggregate_by_dimension(holdings),
        &factor_exposure(holdings),
        Benchmark::model_portfolio(),
        thresholds,
    )
}

/// Evaluates the rules on already derived aggregates.
///
/// `total` is the unrounded total weight; `asset_class` and `exposure` are
/// the rounded outputs of the aggregator and factor calculator.
#[must_use]
pub fn evaluate_flags_from(
    total: f64,
    asset_class: &Distribution<AssetClass>,
    exposure: &FactorExposure,
    model: &Benchmark,
    thresholds: &DeviationThresholds,
) -> Vec<DeviationFlag> {
    let mut flags = Vec::new();

    if (total - 100.0).abs() > thresholds.total_weight {
        flags.push(DeviationFlag::new(
            FlagKind::TotalWeight,
            format!(
                "Portfolio weights total {}%. Rebalance toward 100%.",
                format_fixed(total, 1)
            ),
        ));
    }

    if let Some(targets) = AssetClass::targets(model) {
        for (class, target) in targets.iter() {
            let delta = asset_class.get(class) - target;
            if delta.abs() > thresholds.asset_class {
                flags.push(DeviationFlag::new(
                    FlagKind::Allocation,
                    format!(
                        "{} allocation deviates by {}% from model target.",
                        class.label(),
                        format_signed(delta, 1)
                    ),
                ));
            }
        }
    }

    for (factor, target) in model.factors.iter() {
        let delta = (exposure.get(factor) - target).abs();
        if delta > thresholds.factor {
            flags.push(DeviationFlag::new(
                FlagKind::Factor,
                format!(
                    "{} factor is {} away from model exposure. Consider sleeve adjustments.",
                    factor.key(),
                    format_fixed(delta, 2)
                ),
            ));
        }
    }

    if flags.is_empty() {
        flags.push(DeviationFlag::new(FlagKind::Aligned, ALIGNED_MESSAGE.to_string()));
    }

    tracing::debug!(count = flags.len(), "deviation flags evaluated");
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Factor;

    fn model_like() -> Vec<Holding> {
        vec![
            Holding::builder("Equity")
                .weight(65.0)
                .factor(Factor::Value, 0.2)
                .factor(Factor::Quality, 0.3)
                .factor(Factor::Momentum, 0.2)
                .factor(Factor::Size, 0.1)
                .factor(Factor::Volatility, -0.2)
                .build(),
            Holding::builder("Bonds")
                .weight(35.0)
                .asset_class(AssetClass::FixedIncome)
                .factor(Factor::Value, 0.2)
                .factor(Factor::Quality, 0.3)
                .factor(Factor::Momentum, 0.2)
                .factor(Factor::Size, 0.1)
                .factor(Factor::Volatility, -0.2)
                .build(),
        ]
    }

    #[test]
    fn test_empty_portfolio_flags() {
        let flags = evaluate_flags(&[], &DeviationThresholds::default());
        // Total weight 0 and Equity -65, Fixed Income -25 against the model.
        assert_eq!(flags[0].kind, FlagKind::TotalWeight);
        assert_eq!(
            flags[0].message,
            "Portfolio weights total 0.0%. Rebalance toward 100%."
        );
        assert_eq!(
            flags[1].message,
            "Equity allocation deviates by -65.0% from model target."
        );
        assert_eq!(
            flags[2].message,
            "Fixed Income allocation deviates by -25.0% from model target."
        );
        assert!(flags.iter().all(|f| !f.is_aligned()));
    }

    #[test]
    fn test_aligned_only_when_nothing_fires() {
        let flags = evaluate_flags(&model_like(), &DeviationThresholds::default());
        // Fixed Income is 35 vs 25: exactly 10 > 8
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].kind, FlagKind::Allocation);

        let loose = DeviationThresholds {
            asset_class: 10.0,
            ..DeviationThresholds::default()
        };
        let flags = evaluate_flags(&model_like(), &loose);
        assert_eq!(flags.len(), 1);
        assert!(flags[0].is_aligned());
        assert_eq!(flags[0].to_string(), ALIGNED_MESSAGE);
    }

    #[test]
    fn test_threshold_is_strict() {
        let holdings = vec![Holding::builder("Almost").weight(99.5).build()];
        let flags = evaluate_flags(&holdings, &DeviationThresholds::default());
        assert!(flags.iter().all(|f| f.kind != FlagKind::TotalWeight));
    }

    #[test]
    fn test_factor_message() {
        let holdings = vec![Holding::builder("Deep value")
            .weight(100.0)
            .factor(Factor::Value, 1.0)
            .build()];
        let flags = evaluate_flags(&holdings, &DeviationThresholds::default());
        let value = flags
            .iter()
            .find(|f| f.kind == FlagKind::Factor)
            .map(ToString::to_string);
        assert_eq!(
            value.as_deref(),
            Some("value factor is 0.80 away from model exposure. Consider sleeve adjustments.")
        );
    }

    #[test]
    fn test_rule_order() {
        let holdings = vec![Holding::builder("Tilted")
            .weight(50.0)
            .factor(Factor::Size, 1.5)
            .build()];
        let kinds: Vec<_> = evaluate_flags(&holdings, &DeviationThresholds::default())
            .into_iter()
            .map(|f| f.kind)
            .collect();
        let first_factor = kinds.iter().position(|k| *k == FlagKind::Factor);
        let last_allocation = kinds.iter().rposition(|k| *k == FlagKind::Allocation);
        assert_eq!(kinds[0], FlagKind::TotalWeight);
        assert!(last_allocation < first_factor);
    }
}
