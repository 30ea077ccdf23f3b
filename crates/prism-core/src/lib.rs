//! # Prism Core
//!
//! Core types and helpers for the Prism portfolio lens.
//!
//! This crate provides the foundational building blocks used throughout Prism:
//!
//! - **Categories**: Closed enumerations for currency, region, sector and asset
//!   class, each with an explicit fallback variant
//! - **Factors**: The five style factors scored on every holding
//! - **Numeric helpers**: Lenient number coercion, clamping and decimal rounding
//! - **Records**: Untrusted wire records supplied by portfolio stores
//!
//! ## Design Philosophy
//!
//! - **Reject once**: Labels are validated when a category is constructed and
//!   never re-checked downstream
//! - **Total functions**: Parsing helpers substitute fallbacks instead of failing
//!
//! ## Example
//!
//! ```rust
//! use prism_core::prelude::*;
//!
//! assert_eq!(Region::parse_or_fallback(Some("Europe")), Region::Europe);
//! assert_eq!(Region::parse_or_fallback(Some("Mars")), Region::Other);
//! assert_eq!(AssetClass::parse_or_fallback(None), AssetClass::Alternatives);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod numeric;
pub mod records;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::numeric::{clamp, coerce_number, format_fixed, format_signed, round_dp};
    pub use crate::records::{PortfolioListing, RawHolding, RawPortfolio};
    pub use crate::types::{AssetClass, Category, Currency, Dimension, Factor, Region, Sector};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{AssetClass, Category, Currency, Dimension, Factor, Region, Sector};
