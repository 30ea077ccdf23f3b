//! Holding normalizer.
//!
//! Turns an untrusted [`RawHolding`] into a canonical [`Holding`]. The
//! normalizer is total: malformed input is never an error, it is clamped or
//! replaced by the per-field fallback.
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | missing or blank → `"Unnamed holding"` |
//! | `weight` | coerced to a number (garbage → 0), clamped to `[0, 100]` |
//! | factor scores | coerced to a number, clamped to `[-1.5, 1.5]` |
//! | `currency` / `region` / `sector` | exact label match, else `Other` |
//! | `assetClass` | exact label match, else `Alternatives` |
//!
//! The same per-field rules back session edits, see [`apply_field`].

use prism_core::numeric::coerce_number;
use prism_core::records::RawHolding;
use prism_core::{AssetClass, Category, Currency, Dimension, Factor, Region, Sector};
use serde_json::Value;

use crate::types::{FactorScores, Holding, HoldingBuilder, HoldingField, UNNAMED_HOLDING};

/// Normalizes a raw holding record.
#[must_use]
pub fn normalize_holding(raw: &RawHolding) -> Holding {
    let mut factors = FactorScores::ZERO;
    for factor in Factor::ALL {
        factors.set(factor, coerce_number(raw.field(factor.key())));
    }

    HoldingBuilder::new()
        .name(normalize_name(raw.name.as_ref()))
        .weight(coerce_number(raw.weight.as_ref()))
        .currency(normalize_category(raw.currency.as_ref()))
        .region(normalize_category(raw.region.as_ref()))
        .sector(normalize_category(raw.sector.as_ref()))
        .asset_class(normalize_category(raw.asset_class.as_ref()))
        .factors(factors)
        .build()
}

/// Normalizes a batch of raw records, preserving order.
#[must_use]
pub fn normalize_holdings(raw: &[RawHolding]) -> Vec<Holding> {
    raw.iter().map(normalize_holding).collect()
}

/// Resolves a name value: strings are kept unless blank, numbers are
/// rendered, anything else is unnamed.
#[must_use]
pub fn normalize_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => UNNAMED_HOLDING.to_string(),
    }
}

/// Resolves a categorical value to an enumeration member.
///
/// Only exact string labels match; everything else yields the category's
/// fallback member.
#[must_use]
pub fn normalize_category<C: Category>(value: Option<&Value>) -> C {
    let label = value.and_then(Value::as_str);
    let category = C::parse_or_fallback(label);
    if let Some(v) = value {
        if label.map_or(true, |l| l != category.label()) {
            tracing::debug!(
                dimension = C::DIMENSION.key(),
                value = %v,
                fallback = category.label(),
                "unrecognised category label replaced by fallback"
            );
        }
    }
    category
}

/// Applies one field edit to a holding using the normalizer's rule for
/// that field.
pub fn apply_field(holding: &mut Holding, field: HoldingField, value: &Value) {
    let value = Some(value);
    match field {
        HoldingField::Name => holding.set_name(normalize_name(value)),
        HoldingField::Weight => holding.set_weight(coerce_number(value)),
        HoldingField::Category(Dimension::Currency) => {
            holding.set_currency(normalize_category::<Currency>(value));
        }
        HoldingField::Category(Dimension::Region) => {
            holding.set_region(normalize_category::<Region>(value));
        }
        HoldingField::Category(Dimension::Sector) => {
            holding.set_sector(normalize_category::<Sector>(value));
        }
        HoldingField::Category(Dimension::AssetClass) => {
            holding.set_asset_class(normalize_category::<AssetClass>(value));
        }
        HoldingField::Factor(factor) => holding.set_factor(factor, coerce_number(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawHolding {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_well_formed_record_is_unchanged() {
        let h = normalize_holding(&raw(json!({
            "name": "US Tech ETF",
            "weight": 30,
            "currency": "USD",
            "region": "North America",
            "sector": "Technology",
            "assetClass": "Equity",
            "value": -0.2,
            "quality": 0.6,
            "momentum": 0.8,
            "size": 0.7,
            "volatility": 0.4
        })));

        assert_eq!(h.name(), "US Tech ETF");
        assert_eq!(h.weight(), 30.0);
        assert_eq!(h.currency(), Currency::USD);
        assert_eq!(h.region(), Region::NorthAmerica);
        assert_eq!(h.sector(), Sector::Technology);
        assert_eq!(h.asset_class(), AssetClass::Equity);
        assert_eq!(h.factor(Factor::Value), -0.2);
        assert_eq!(h.factor(Factor::Momentum), 0.8);
    }

    #[test]
    fn test_empty_record_gets_all_fallbacks() {
        let h = normalize_holding(&RawHolding::default());

        assert_eq!(h.name(), UNNAMED_HOLDING);
        assert_eq!(h.weight(), 0.0);
        assert_eq!(h.currency(), Currency::Other);
        assert_eq!(h.region(), Region::Other);
        assert_eq!(h.sector(), Sector::Other);
        assert_eq!(h.asset_class(), AssetClass::Alternatives);
        assert_eq!(*h.factors(), FactorScores::ZERO);
    }

    #[test]
    fn test_clamping() {
        let h = normalize_holding(&raw(json!({
            "weight": -12,
            "value": 4,
            "quality": -4,
            "momentum": "abc",
            "size": "1.25"
        })));

        assert_eq!(h.weight(), 0.0);
        assert_eq!(h.factor(Factor::Value), 1.5);
        assert_eq!(h.factor(Factor::Quality), -1.5);
        assert_eq!(h.factor(Factor::Momentum), 0.0);
        assert_eq!(h.factor(Factor::Size), 1.25);
    }

    #[test]
    fn test_category_matching_is_exact() {
        let h = normalize_holding(&raw(json!({
            "currency": "usd",
            "region": "Europe ",
            "sector": 7,
            "assetClass": "Fixed Income"
        })));

        assert_eq!(h.currency(), Currency::Other);
        assert_eq!(h.region(), Region::Other);
        assert_eq!(h.sector(), Sector::Other);
        assert_eq!(h.asset_class(), AssetClass::FixedIncome);
    }

    #[test]
    fn test_numeric_name_is_rendered() {
        assert_eq!(normalize_name(Some(&json!(42))), "42");
        assert_eq!(normalize_name(Some(&json!(""))), UNNAMED_HOLDING);
        assert_eq!(normalize_name(Some(&json!(true))), UNNAMED_HOLDING);
    }

    #[test]
    fn test_apply_field_uses_same_rules() {
        let mut h = Holding::template();

        apply_field(&mut h, HoldingField::Weight, &json!("120"));
        assert_eq!(h.weight(), 100.0);

        apply_field(&mut h, HoldingField::Factor(Factor::Size), &json!(-2));
        assert_eq!(h.factor(Factor::Size), -1.5);

        apply_field(
            &mut h,
            HoldingField::Category(Dimension::AssetClass),
            &json!("Commodities"),
        );
        assert_eq!(h.asset_class(), AssetClass::Alternatives);

        apply_field(
            &mut h,
            HoldingField::Category(Dimension::Region),
            &json!("Emerging Markets"),
        );
        assert_eq!(h.region(), Region::EmergingMarkets);

        apply_field(&mut h, HoldingField::Name, &json!(""));
        assert_eq!(h.name(), UNNAMED_HOLDING);
    }
}
