//! # Prism Ext File
//!
//! Local portfolio stores for Prism.
//!
//! This crate provides default implementations for demos, tests and offline
//! use:
//! - [`FallbackStore`]: the built-in sample portfolio list
//! - [`JsonDirectoryStore`]: a directory of portfolio JSON documents
//!
//! For remote storage, use the Data Lake extension.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod directory;
mod fallback;

pub use directory::*;
pub use fallback::*;
