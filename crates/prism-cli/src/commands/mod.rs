//! CLI command implementations.

pub mod analyze;
pub mod benchmarks;
pub mod list;
pub mod source;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use benchmarks::BenchmarksArgs;

use std::str::FromStr;

use serde_json::Value;

use prism_portfolio::HoldingField;

use crate::error::CliError;

/// A holding edit given as `INDEX.FIELD=VALUE`.
///
/// Values are passed on as text, the way an edit form submits them; the
/// session revalidates them with the normalizer's rule for the field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    /// Zero-based holding index.
    pub index: usize,
    /// Field to change.
    pub field: HoldingField,
    /// New value.
    pub value: Value,
}

impl FromStr for FieldEdit {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidEdit(s.to_string());

        let (target, value) = s.split_once('=').ok_or_else(invalid)?;
        let (index, key) = target.split_once('.').ok_or_else(invalid)?;
        let index = index.trim().parse::<usize>().map_err(|_| invalid())?;
        let field = key.trim().parse::<HoldingField>().map_err(|_| invalid())?;

        Ok(Self {
            index,
            field,
            value: Value::String(value.to_string()),
        })
    }
}
