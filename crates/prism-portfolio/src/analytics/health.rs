//! Status banding and the portfolio health summary.

use serde::Serialize;
use std::fmt;

use crate::benchmark::{max_deviation_vs, Benchmark};
use crate::bucketing::Allocations;
use crate::types::{BandThresholds, HealthBands};

/// Three-way status of a scalar against a low/high threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusBand {
    /// At or below the low threshold.
    Aligned,
    /// Above low, at or below high.
    Watch,
    /// Above the high threshold.
    #[serde(rename = "Off target")]
    OffTarget,
}

impl StatusBand {
    /// Classifies a value against `bands`.
    #[must_use]
    pub fn classify(value: f64, bands: BandThresholds) -> Self {
        if value <= bands.low {
            StatusBand::Aligned
        } else if value <= bands.high {
            StatusBand::Watch
        } else {
            StatusBand::OffTarget
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Aligned => "Aligned",
            StatusBand::Watch => "Watch",
            StatusBand::OffTarget => "Off target",
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One health card: a headline value and its status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCard {
    /// Card title.
    pub title: &'static str,
    /// Headline value in percent.
    pub value: f64,
    /// Status of the banded quantity.
    pub status: StatusBand,
}

/// The three health cards of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    /// Total weight, banded on `|total - 100|`.
    pub total_weight: HealthCard,
    /// Max asset-class deviation vs the model portfolio.
    pub asset_class_deviation: HealthCard,
    /// Max region deviation vs the market index.
    pub region_deviation: HealthCard,
}

impl HealthSummary {
    /// Builds the summary from the unrounded total weight and the
    /// portfolio's distributions.
    #[must_use]
    pub fn calculate(total_weight: f64, allocations: &Allocations, bands: &HealthBands) -> Self {
        let asset_class = max_deviation_vs(&allocations.asset_class, Benchmark::model_portfolio());
        let region = max_deviation_vs(&allocations.region, Benchmark::market_index());

        Self {
            total_weight: HealthCard {
                title: "Total portfolio weight",
                value: total_weight,
                status: StatusBand::classify((total_weight - 100.0).abs(), bands.total_weight),
            },
            asset_class_deviation: HealthCard {
                title: "Max asset-class deviation vs model",
                value: asset_class,
                status: StatusBand::classify(asset_class, bands.asset_class),
            },
            region_deviation: HealthCard {
                title: "Max regional deviation vs MSCI World",
                value: region,
                status: StatusBand::classify(region, bands.region),
            },
        }
    }

    /// Iterates the cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &HealthCard> {
        [
            &self.total_weight,
            &self.asset_class_deviation,
            &self.region_deviation,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holding;
    use prism_core::{AssetClass, Region};

    #[test]
    fn test_classify_boundaries() {
        let bands = BandThresholds::new(0.5, 2.5);
        assert_eq!(StatusBand::classify(0.0, bands), StatusBand::Aligned);
        assert_eq!(StatusBand::classify(0.5, bands), StatusBand::Aligned);
        assert_eq!(StatusBand::classify(0.51, bands), StatusBand::Watch);
        assert_eq!(StatusBand::classify(2.5, bands), StatusBand::Watch);
        assert_eq!(StatusBand::classify(2.6, bands), StatusBand::OffTarget);
    }

    #[test]
    fn test_summary_for_model_like_portfolio() {
        let holdings = vec![
            Holding::builder("Equity").weight(65.0).region(Region::NorthAmerica).build(),
            Holding::builder("Bonds")
                .weight(25.0)
                .region(Region::Europe)
                .asset_class(AssetClass::FixedIncome)
                .build(),
            Holding::builder("Real")
                .weight(10.0)
                .region(Region::Europe)
                .asset_class(AssetClass::RealAssets)
                .build(),
        ];
        let allocations = Allocations::from_holdings(&holdings);
        let summary = HealthSummary::calculate(100.0, &allocations, &HealthBands::default());

        assert_eq!(summary.total_weight.status, StatusBand::Aligned);
        // Real Assets 10 vs 5, Cash 0 vs 3, Alternatives 0 vs 2
        assert_eq!(summary.asset_class_deviation.value, 5.0);
        assert_eq!(summary.asset_class_deviation.status, StatusBand::Aligned);
        // North America 65 vs 71, Europe 35 vs 18
        assert_eq!(summary.region_deviation.value, 17.0);
        assert_eq!(summary.region_deviation.status, StatusBand::OffTarget);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_value(StatusBand::OffTarget).unwrap(),
            "Off target"
        );
        assert_eq!(StatusBand::Watch.to_string(), "Watch");
    }
}
