//! Domain types for portfolio analytics.
//!
//! - [`Holding`]: A single position with weight, categories and factor scores
//! - [`FactorScores`]: Clamped style-factor scores
//! - [`HoldingField`]: Addressable fields for edit commands
//! - [`AnalyticsConfig`]: Deviation thresholds and health bands

mod config;
mod holding;

// Re-export all types
pub use config::{AnalyticsConfig, BandThresholds, DeviationThresholds, HealthBands};
pub use holding::{
    FactorScores, Holding, HoldingBuilder, HoldingField, MAX_WEIGHT, MIN_WEIGHT, UNNAMED_HOLDING,
};
