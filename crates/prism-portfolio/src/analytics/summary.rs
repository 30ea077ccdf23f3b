//! Portfolio analysis summary.
//!
//! Runs the whole pipeline (aggregation, exposure, comparison, rules) in one
//! pass and bundles the derived state.

use serde::Serialize;

use super::{factor_exposure, FactorExposure, HealthSummary};
use crate::benchmark::{factor_comparison, AllocationCards, Benchmark, FactorComparisonRow};
use crate::bucketing::{total_weight, Allocations};
use crate::rules::{evaluate_flags_from, DeviationFlag};
use crate::types::{AnalyticsConfig, Holding};

/// The full derived state of a set of holdings.
///
/// This is the primary output handed to presentation layers. It is
/// recomputed from scratch on every change and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    /// Number of holdings.
    pub holding_count: usize,

    /// Unrounded sum of holding weights.
    pub total_weight: f64,

    /// Weight by currency, region, sector and asset class.
    pub allocations: Allocations,

    /// Weighted style-factor exposure.
    pub factor_exposure: FactorExposure,

    /// Exposure vs both benchmarks, one row per factor.
    pub factor_comparison: Vec<FactorComparisonRow>,

    /// Distributions set against their benchmarks.
    pub allocation_cards: AllocationCards,

    /// Health summary cards.
    pub health: HealthSummary,

    /// Ordered deviation flags; never empty.
    pub flags: Vec<DeviationFlag>,
}

impl PortfolioAnalysis {
    /// Calculates the analysis for `holdings`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism_portfolio::prelude::*;
    ///
    /// let holdings = vec![Holding::builder("US Tech ETF").weight(90.0).build()];
    /// let analysis = PortfolioAnalysis::calculate(&holdings, &AnalyticsConfig::default());
    ///
    /// assert_eq!(analysis.allocations.currency.get(Currency::USD), 90.0);
    /// assert!(analysis.flags[0].message.contains("90.0%"));
    /// ```
    #[must_use]
    pub fn calculate(holdings: &[Holding], config: &AnalyticsConfig) -> Self {
        let total = total_weight(holdings);
        let allocations = Allocations::from_holdings(holdings);
        let exposure = factor_exposure(holdings);

        let factor_rows = factor_comparison(&exposure);
        let cards = AllocationCards::from_allocations(&allocations);
        let health = HealthSummary::calculate(total, &allocations, &config.health);
        let flags = evaluate_flags_from(
            total,
            &allocations.asset_class,
            &exposure,
            Benchmark::model_portfolio(),
            &config.thresholds,
        );

        Self {
            holding_count: holdings.len(),
            total_weight: total,
            allocations,
            factor_exposure: exposure,
            factor_comparison: factor_rows,
            allocation_cards: cards,
            health,
            flags,
        }
    }

    /// Returns true if the only flag is the informational "aligned" one.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.flags.iter().all(DeviationFlag::is_aligned)
    }
}

/// Shorthand for [`PortfolioAnalysis::calculate`].
#[must_use]
pub fn analyze(holdings: &[Holding], config: &AnalyticsConfig) -> PortfolioAnalysis {
    PortfolioAnalysis::calculate(holdings, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::StatusBand;
    use crate::rules::{evaluate_flags, FlagKind};
    use prism_core::{Currency, Factor};

    #[test]
    fn test_empty_holdings() {
        let analysis = analyze(&[], &AnalyticsConfig::default());
        assert_eq!(analysis.holding_count, 0);
        assert_eq!(analysis.total_weight, 0.0);
        assert_eq!(analysis.factor_exposure, FactorExposure::default());
        assert_eq!(analysis.health.total_weight.status, StatusBand::OffTarget);
        assert!(!analysis.flags.is_empty());
    }

    #[test]
    fn test_flags_match_standalone_engine() {
        let holdings = vec![
            Holding::builder("A")
                .weight(70.0)
                .currency(Currency::EUR)
                .factor(Factor::Quality, 1.2)
                .build(),
            Holding::builder("B").weight(20.0).build(),
        ];
        let config = AnalyticsConfig::default();
        let analysis = analyze(&holdings, &config);

        assert_eq!(analysis.flags, evaluate_flags(&holdings, &config.thresholds));
        assert_eq!(analysis.flags[0].kind, FlagKind::TotalWeight);
        assert!(!analysis.is_aligned());
    }

    #[test]
    fn test_config_thresholds_are_applied() {
        let holdings = vec![Holding::builder("A").weight(97.0).build()];
        let strict = analyze(&holdings, &AnalyticsConfig::default());
        assert_eq!(strict.flags[0].kind, FlagKind::TotalWeight);

        let relaxed = AnalyticsConfig::new()
            .with_total_weight_threshold(5.0)
            .with_asset_class_threshold(50.0)
            .with_factor_threshold(1.0);
        assert!(analyze(&holdings, &relaxed).is_aligned());
    }

    #[test]
    fn test_serialized_shape() {
        let holdings = vec![Holding::builder("A").weight(100.0).build()];
        let json = serde_json::to_value(analyze(&holdings, &AnalyticsConfig::default())).unwrap();

        assert_eq!(json["totalWeight"], 100.0);
        assert_eq!(json["allocations"]["currency"]["USD"], 100.0);
        assert_eq!(json["factorExposure"]["value"], 0.0);
        assert_eq!(json["factorComparison"][0]["factor"], "value");
        assert_eq!(json["allocationCards"]["region"]["benchmarkName"], "MSCI World");
        assert_eq!(json["health"]["totalWeight"]["status"], "Aligned");
        assert_eq!(json["flags"][0]["kind"], "allocation");
    }
}
