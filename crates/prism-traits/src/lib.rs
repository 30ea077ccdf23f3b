//! # Prism Traits
//!
//! Trait definitions for Prism portfolio stores.
//!
//! This crate contains ONLY trait definitions with ZERO runtime dependencies.
//! All implementations are in separate extension crates.
//!
//! ## Module Structure
//!
//! - [`store`]: The [`PortfolioStore`] trait and [`SourceInfo`]
//! - [`error`]: [`TraitError`]
//!
//! ## Dependency Injection
//!
//! Front ends pick a store at startup and talk to it through the trait:
//!
//! ```ignore
//! let store: Box<dyn PortfolioStore> = Box::new(FallbackStore::new());
//! let listings = store.list_portfolios().await?;
//! let raw = store.fetch_portfolio(&listings[0].id).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod store;

// Re-export commonly used types
pub use error::{TraitError, TraitResult};
pub use store::{PortfolioStore, SourceInfo, SourceKind};
