//! Portfolio-level analytics.
//!
//! This module provides the derived state of a set of holdings:
//! - Weighted style-factor exposure
//! - Status banding and the health summary
//! - The combined [`PortfolioAnalysis`]
//!
//! All functions are pure - they take holdings and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod factors;
mod health;
mod summary;

pub use factors::*;
pub use health::*;
pub use summary::*;
