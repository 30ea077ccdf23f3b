//! # Prism Portfolio
//!
//! Allocation and style-factor analytics for portfolio holdings.
//!
//! This crate is the analytics core of Prism. It turns untrusted holding
//! records into canonical holdings and derives everything a presentation
//! layer needs from them.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Aggregation, exposure, comparison and rules take the
//!   holdings as an explicit parameter and have no side effects
//! - **Reject once**: Categories are enumeration members from construction on,
//!   numeric fields are clamped at the boundary
//! - **Explicit session**: Mutable state lives in a [`PortfolioSession`] value,
//!   never in a shared global
//!
//! ## Features
//!
//! - **Normalization**: Clamping, lenient number coercion, category fallbacks
//! - **Aggregation**: Weight by currency, region, sector and asset class
//! - **Factor Exposure**: Weighted value, quality, momentum, size, volatility
//! - **Benchmark Comparison**: Model portfolio and market index targets
//! - **Deviation Flags**: Ordered, human-readable alerts
//! - **Health Summary**: Aligned / Watch / Off target status bands
//!
//! ## Quick Start
//!
//! ```rust
//! use prism_portfolio::prelude::*;
//!
//! let holdings = vec![Holding::builder("US Tech ETF")
//!     .weight(100.0)
//!     .currency(Currency::USD)
//!     .region(Region::NorthAmerica)
//!     .sector(Sector::Technology)
//!     .asset_class(AssetClass::Equity)
//!     .build()];
//!
//! let analysis = analyze(&holdings, &AnalyticsConfig::default());
//! assert_eq!(analysis.allocations.currency.get(Currency::USD), 100.0);
//! assert_eq!(
//!     analysis.flags[0].message,
//!     "Equity allocation deviates by +35.0% from model target."
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`normalizer`] - Raw record to canonical holding
//! - [`bucketing`] - Distributions by categorical dimension
//! - [`analytics`] - Factor exposure, health summary, full analysis
//! - [`benchmark`] - Benchmark tables and comparison
//! - [`rules`] - Deviation flags
//! - [`portfolio`] - Portfolio and session types
//! - [`types`] - Core types (Holding, Config)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod analytics;
pub mod benchmark;
pub mod bucketing;
pub mod error;
pub mod normalizer;
pub mod portfolio;
pub mod rules;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{
    // Config
    AnalyticsConfig,
    BandThresholds,
    DeviationThresholds,
    // Holding
    FactorScores,
    HealthBands,
    Holding,
    HoldingBuilder,
    HoldingField,
};

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioSession};

// Re-export analytics types and functions
pub use analytics::{
    analyze, factor_exposure, FactorExposure, HealthCard, HealthSummary, PortfolioAnalysis,
    StatusBand,
};

// Re-export bucketing types and functions
pub use bucketing::{aggregate_by_dimension, total_weight, Allocations, Bucketed, Distribution};

// Re-export benchmark types and functions
pub use benchmark::{
    allocation_rows, factor_comparison, max_absolute_deviation, max_deviation_vs, AllocationCard,
    AllocationCards, Benchmark, BenchmarkKind, DeviationRow, FactorComparisonRow, FactorTargets,
    Targets,
};

// Re-export rules
pub use rules::{evaluate_flags, evaluate_flags_from, DeviationFlag, FlagKind, ALIGNED_MESSAGE};

pub use normalizer::{normalize_holding, normalize_holdings};

/// Prelude module for convenient imports.
///
/// ```rust
/// use prism_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::benchmark::*;
    pub use crate::bucketing::*;
    pub use crate::error::*;
    pub use crate::normalizer::{apply_field, normalize_holding, normalize_holdings};
    pub use crate::portfolio::*;
    pub use crate::rules::*;
    pub use crate::types::*;

    // Re-export from prism-core
    pub use prism_core::prelude::*;
}
