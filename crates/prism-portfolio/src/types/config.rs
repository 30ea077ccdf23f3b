//! Configuration for portfolio analytics computation.

use serde::{Deserialize, Serialize};

/// Thresholds used by the deviation flag rules.
///
/// A rule fires when the absolute deviation is strictly greater than its
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviationThresholds {
    /// Allowed distance of the total weight from 100%.
    pub total_weight: f64,

    /// Allowed asset-class deviation from the model portfolio, in points.
    pub asset_class: f64,

    /// Allowed factor exposure distance from the model portfolio.
    pub factor: f64,
}

impl Default for DeviationThresholds {
    fn default() -> Self {
        Self {
            total_weight: 0.5,
            asset_class: 8.0,
            factor: 0.35,
        }
    }
}

/// A low/high threshold pair for three-way status banding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Values at or below this are aligned.
    pub low: f64,

    /// Values at or below this (and above `low`) are on watch.
    pub high: f64,
}

impl BandThresholds {
    /// Creates a new threshold pair.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Status band thresholds for the health summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthBands {
    /// Bands for `|total weight - 100|`.
    pub total_weight: BandThresholds,

    /// Bands for the max asset-class deviation vs the model portfolio.
    pub asset_class: BandThresholds,

    /// Bands for the max regional deviation vs the market index.
    pub region: BandThresholds,
}

impl Default for HealthBands {
    fn default() -> Self {
        Self {
            total_weight: BandThresholds::new(0.5, 2.5),
            asset_class: BandThresholds::new(5.0, 10.0),
            region: BandThresholds::new(8.0, 15.0),
        }
    }
}

/// Configuration for portfolio analytics computation.
///
/// The defaults are the fixed constants of the deviation rules; overriding
/// them is an opt-in for callers that need different tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Deviation flag thresholds.
    pub thresholds: DeviationThresholds,

    /// Health summary bands.
    pub health: HealthBands,
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total-weight flag threshold.
    #[must_use]
    pub fn with_total_weight_threshold(mut self, threshold: f64) -> Self {
        self.thresholds.total_weight = threshold;
        self
    }

    /// Sets the asset-class flag threshold.
    #[must_use]
    pub fn with_asset_class_threshold(mut self, threshold: f64) -> Self {
        self.thresholds.asset_class = threshold;
        self
    }

    /// Sets the factor flag threshold.
    #[must_use]
    pub fn with_factor_threshold(mut self, threshold: f64) -> Self {
        self.thresholds.factor = threshold;
        self
    }

    /// Sets the health summary bands.
    #[must_use]
    pub fn with_health_bands(mut self, bands: HealthBands) -> Self {
        self.health = bands;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.thresholds.total_weight, 0.5);
        assert_eq!(config.thresholds.asset_class, 8.0);
        assert_eq!(config.thresholds.factor, 0.35);
        assert_eq!(config.health.total_weight, BandThresholds::new(0.5, 2.5));
        assert_eq!(config.health.asset_class, BandThresholds::new(5.0, 10.0));
        assert_eq!(config.health.region, BandThresholds::new(8.0, 15.0));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyticsConfig::new()
            .with_total_weight_threshold(1.0)
            .with_asset_class_threshold(5.0)
            .with_factor_threshold(0.5);

        assert_eq!(config.thresholds.total_weight, 1.0);
        assert_eq!(config.thresholds.asset_class, 5.0);
        assert_eq!(config.thresholds.factor, 0.5);
        assert_eq!(config.health, HealthBands::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AnalyticsConfig = toml::from_str(
            r#"
            [thresholds]
            factor = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.thresholds.factor, 0.25);
        assert_eq!(config.thresholds.total_weight, 0.5);
        assert_eq!(config.health, HealthBands::default());
    }

    #[test]
    fn test_serde() {
        let config = AnalyticsConfig::new().with_asset_class_threshold(6.0);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalyticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
