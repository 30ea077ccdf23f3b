//! # Prism Ext Datalake
//!
//! Azure Data Lake Storage Gen2 portfolio store for Prism.
//!
//! Portfolios are JSON documents in one directory of a Data Lake
//! filesystem, read with a SAS token over the DFS REST endpoint.
//!
//! ```ignore
//! use prism_ext_datalake::{DataLakeConfig, DataLakeStore};
//!
//! if let Some(config) = DataLakeConfig::from_env() {
//!     let store = DataLakeStore::new(config)?;
//!     let listings = store.list_portfolios().await?;
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod store;

pub use config::*;
pub use store::*;
