//! Deviation rules that turn aggregates into human-readable flags.

mod flags;

pub use flags::*;
