//! Domain types for the portfolio lens.
//!
//! - [`Category`]: Trait implemented by every closed categorical enumeration
//! - [`Currency`], [`Region`], [`Sector`], [`AssetClass`]: The four dimensions
//! - [`Factor`]: The five style factors

mod asset_class;
mod category;
mod currency;
mod factor;
mod region;
mod sector;

// Re-export all types
pub use asset_class::AssetClass;
pub use category::{Category, Dimension};
pub use currency::Currency;
pub use factor::Factor;
pub use region::Region;
pub use sector::Sector;
