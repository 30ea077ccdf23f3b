//! Benchmark reference data and comparison.
//!
//! Provides benchmark-relative analysis:
//! - The two static benchmarks (model portfolio, market index)
//! - Max absolute deviation over a benchmark's covered members
//! - Per-member signed deviation rows for display
//! - Factor exposure vs both benchmarks
//!
//! # Example
//!
//! ```rust
//! use prism_portfolio::prelude::*;
//!
//! let holdings = vec![Holding::builder("US Tech ETF").weight(100.0).build()];
//! let by_region: Distribution<Region> = aggregate_by_dimension(&holdings);
//!
//! let deviation = max_deviation_vs(&by_region, Benchmark::market_index());
//! assert_eq!(deviation, 29.0);
//! ```

mod comparison;
mod targets;

pub use comparison::*;
pub use targets::*;
