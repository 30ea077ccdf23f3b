//! Untrusted wire records exchanged with portfolio stores.
//!
//! These mirror the JSON documents a store serves. Every field is optional
//! and loosely typed; nothing here is validated. The analytics crate turns
//! a [`RawHolding`] into a canonical holding through its normalizer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// As-of label used when a document does not carry one.
pub const UNKNOWN_AS_OF: &str = "unknown";

/// A holding record as supplied by a store or an edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHolding {
    /// Display name.
    #[serde(default)]
    pub name: Option<Value>,
    /// Weight in percent.
    #[serde(default)]
    pub weight: Option<Value>,
    /// Currency label.
    #[serde(default)]
    pub currency: Option<Value>,
    /// Region label.
    #[serde(default)]
    pub region: Option<Value>,
    /// Sector label.
    #[serde(default)]
    pub sector: Option<Value>,
    /// Asset class label.
    #[serde(default)]
    pub asset_class: Option<Value>,
    /// Value factor score.
    #[serde(default)]
    pub value: Option<Value>,
    /// Quality factor score.
    #[serde(default)]
    pub quality: Option<Value>,
    /// Momentum factor score.
    #[serde(default)]
    pub momentum: Option<Value>,
    /// Size factor score.
    #[serde(default)]
    pub size: Option<Value>,
    /// Volatility factor score.
    #[serde(default)]
    pub volatility: Option<Value>,
}

impl RawHolding {
    /// Returns the raw value of a record field by its key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            "name" => self.name.as_ref(),
            "weight" => self.weight.as_ref(),
            "currency" => self.currency.as_ref(),
            "region" => self.region.as_ref(),
            "sector" => self.sector.as_ref(),
            "assetClass" => self.asset_class.as_ref(),
            "value" => self.value.as_ref(),
            "quality" => self.quality.as_ref(),
            "momentum" => self.momentum.as_ref(),
            "size" => self.size.as_ref(),
            "volatility" => self.volatility.as_ref(),
            _ => None,
        }
    }
}

/// Identity metadata for one portfolio in a store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioListing {
    /// Store identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// As-of date label (`YYYY-MM-DD` or `"unknown"`).
    pub as_of: String,
}

impl PortfolioListing {
    /// Parses the as-of label into a date, if it is one.
    pub fn as_of_date(&self) -> CoreResult<NaiveDate> {
        parse_as_of(&self.as_of)
    }
}

/// A full portfolio document as fetched from a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPortfolio {
    /// Store identifier.
    #[serde(default)]
    pub id: Option<Value>,
    /// Display name.
    #[serde(default)]
    pub name: Option<Value>,
    /// As-of date label.
    #[serde(default)]
    pub as_of: Option<Value>,
    /// Holding records; absent or `null` means no holdings.
    #[serde(default)]
    pub holdings: Option<Vec<RawHolding>>,
}

impl RawPortfolio {
    /// Returns the holding records, treating an absent list as empty.
    #[must_use]
    pub fn holdings(&self) -> &[RawHolding] {
        self.holdings.as_deref().unwrap_or(&[])
    }

    /// Builds listing metadata, filling gaps from the document's source.
    ///
    /// `fallback_id` is used when the document has no `id`, `fallback_name`
    /// when it has no `name`; a missing `asOf` becomes `"unknown"`. Numeric
    /// metadata is rendered as text.
    #[must_use]
    pub fn listing(&self, fallback_id: &str, fallback_name: &str) -> PortfolioListing {
        let text = |value: &Option<Value>, fallback: &str| {
            metadata_text(value.as_ref()).unwrap_or_else(|| fallback.to_string())
        };
        PortfolioListing {
            id: text(&self.id, fallback_id),
            name: text(&self.name, fallback_name),
            as_of: text(&self.as_of, UNKNOWN_AS_OF),
        }
    }

    /// The document's own identifier, if it carries a usable one.
    #[must_use]
    pub fn document_id(&self) -> Option<String> {
        metadata_text(self.id.as_ref())
    }

    /// Builds listing metadata for a document read from `file_name`.
    ///
    /// The id defaults to the file name without its `.json` extension, the
    /// name to the file name itself.
    #[must_use]
    pub fn listing_for_file(&self, file_name: &str) -> PortfolioListing {
        self.listing(json_file_stem(file_name), file_name)
    }
}

/// Strips a trailing `.json` extension (any case) from a file name.
#[must_use]
pub fn json_file_stem(file_name: &str) -> &str {
    let split = file_name.len().saturating_sub(".json".len());
    match (file_name.get(..split), file_name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".json") => stem,
        _ => file_name,
    }
}

/// Renders a loosely typed metadata value as text.
///
/// Non-empty strings, non-zero numbers and `true` are kept; `null`, `false`,
/// `0`, `""`, arrays and objects count as absent.
#[must_use]
pub fn metadata_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Parses an as-of label in `YYYY-MM-DD` form.
pub fn parse_as_of(label: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(label.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::invalid_date(format!("{label}: {e}")))
}
