//! Portfolio bucketing by categorical dimension.
//!
//! - **Currency, region, sector, asset class**: weight distributions whose
//!   key set is always the full enumeration
//!
//! All functions are pure - they take holdings and return distributions
//! without modifying state.
//!
//! # Example
//!
//! ```rust
//! use prism_portfolio::prelude::*;
//!
//! let holdings = vec![Holding::builder("Bund").weight(40.0).currency(Currency::EUR).build()];
//! let by_currency: Distribution<Currency> = aggregate_by_dimension(&holdings);
//! assert_eq!(by_currency.get(Currency::EUR), 40.0);
//! assert_eq!(by_currency.get(Currency::GBP), 0.0);
//! ```

mod distribution;

pub use distribution::*;
