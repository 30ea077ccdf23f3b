//! Static benchmark reference data.

use once_cell::sync::Lazy;
use prism_core::{AssetClass, Category, Currency, Factor, Region, Sector};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Target weights (percent) for the members of one dimension.
///
/// A target set may cover only part of an enumeration; members without a
/// target are simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Targets<C: Category> {
    entries: Vec<(C, f64)>,
}

impl<C: Category> Targets<C> {
    /// Creates a target set from `(member, weight)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (C, f64)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the target for a member, if the set covers it.
    #[must_use]
    pub fn get(&self, category: C) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, w)| *w)
    }

    /// Iterates `(member, target)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of members with a target.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Category> Serialize for Targets<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, weight) in &self.entries {
            map.serialize_entry(category.label(), weight)?;
        }
        map.end()
    }
}

/// Target score per style factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorTargets {
    scores: [f64; 5],
}

impl FactorTargets {
    /// Creates targets in [`Factor::ALL`] order.
    #[must_use]
    pub const fn new(scores: [f64; 5]) -> Self {
        Self { scores }
    }

    /// Returns the target score for a factor.
    #[must_use]
    pub fn get(&self, factor: Factor) -> f64 {
        self.scores[factor.index()]
    }

    /// Iterates `(factor, target)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Serialize for FactorTargets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Factor::ALL.len()))?;
        for (factor, score) in self.iter() {
            map.serialize_entry(factor.key(), &score)?;
        }
        map.end()
    }
}

/// Identifies one of the built-in benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BenchmarkKind {
    /// Strategic model portfolio with full coverage.
    ModelPortfolio,
    /// Market-cap index with region, sector and factor coverage only.
    MarketIndex,
}

impl BenchmarkKind {
    /// Both benchmarks in display order.
    pub const ALL: [BenchmarkKind; 2] = [BenchmarkKind::ModelPortfolio, BenchmarkKind::MarketIndex];

    /// Short key used on the command line.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            BenchmarkKind::ModelPortfolio => "model",
            BenchmarkKind::MarketIndex => "index",
        }
    }

    /// Returns the benchmark's reference data.
    #[must_use]
    pub fn benchmark(&self) -> &'static Benchmark {
        match self {
            BenchmarkKind::ModelPortfolio => Benchmark::model_portfolio(),
            BenchmarkKind::MarketIndex => Benchmark::market_index(),
        }
    }
}

impl fmt::Display for BenchmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A named set of allocation and factor targets.
///
/// Dimensions the benchmark does not cover are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    /// Which built-in benchmark this is.
    pub kind: BenchmarkKind,
    /// Display name.
    pub name: &'static str,
    /// One-line description of what the benchmark covers.
    pub description: &'static str,
    /// Currency targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Targets<Currency>>,
    /// Region targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Targets<Region>>,
    /// Sector targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Targets<Sector>>,
    /// Asset-class targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<Targets<AssetClass>>,
    /// Factor score targets.
    pub factors: FactorTargets,
}

static MODEL_PORTFOLIO: Lazy<Benchmark> = Lazy::new(|| Benchmark {
    kind: BenchmarkKind::ModelPortfolio,
    name: "Model portfolio",
    description: "Asset class + factor targets",
    currency: Some(Targets::new([
        (Currency::USD, 55.0),
        (Currency::EUR, 30.0),
        (Currency::GBP, 5.0),
        (Currency::JPY, 5.0),
        (Currency::Other, 5.0),
    ])),
    region: Some(Targets::new([
        (Region::NorthAmerica, 50.0),
        (Region::Europe, 25.0),
        (Region::AsiaPacific, 10.0),
        (Region::EmergingMarkets, 10.0),
        (Region::Other, 5.0),
    ])),
    sector: Some(Targets::new([
        (Sector::Technology, 24.0),
        (Sector::Financials, 16.0),
        (Sector::Healthcare, 14.0),
        (Sector::Industrials, 12.0),
        (Sector::Consumer, 14.0),
        (Sector::Energy, 8.0),
        (Sector::Other, 12.0),
    ])),
    asset_class: Some(Targets::new([
        (AssetClass::Equity, 65.0),
        (AssetClass::FixedIncome, 25.0),
        (AssetClass::RealAssets, 5.0),
        (AssetClass::Cash, 3.0),
        (AssetClass::Alternatives, 2.0),
    ])),
    factors: FactorTargets::new([0.2, 0.3, 0.2, 0.1, -0.2]),
});

static MARKET_INDEX: Lazy<Benchmark> = Lazy::new(|| Benchmark {
    kind: BenchmarkKind::MarketIndex,
    name: "MSCI World",
    description: "Region + sector + factor baseline",
    currency: None,
    region: Some(Targets::new([
        (Region::NorthAmerica, 71.0),
        (Region::Europe, 18.0),
        (Region::AsiaPacific, 9.0),
        (Region::EmergingMarkets, 0.0),
        (Region::Other, 2.0),
    ])),
    sector: Some(Targets::new([
        (Sector::Technology, 23.0),
        (Sector::Financials, 15.0),
        (Sector::Healthcare, 11.0),
        (Sector::Industrials, 11.0),
        (Sector::Consumer, 12.0),
        (Sector::Energy, 5.0),
        (Sector::Other, 23.0),
    ])),
    asset_class: None,
    factors: FactorTargets::new([0.0, 0.15, 0.1, 0.2, 0.0]),
});

impl Benchmark {
    /// The strategic model portfolio.
    #[must_use]
    pub fn model_portfolio() -> &'static Benchmark {
        &MODEL_PORTFOLIO
    }

    /// The market-cap index baseline.
    #[must_use]
    pub fn market_index() -> &'static Benchmark {
        &MARKET_INDEX
    }

    /// Both benchmarks in display order.
    #[must_use]
    pub fn all() -> [&'static Benchmark; 2] {
        BenchmarkKind::ALL.map(|kind| kind.benchmark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_model_portfolio_has_full_coverage() {
        let model = Benchmark::model_portfolio();
        assert_eq!(model.kind, BenchmarkKind::ModelPortfolio);
        assert_eq!(model.currency.as_ref().map(Targets::len), Some(5));
        assert_eq!(model.region.as_ref().map(Targets::len), Some(5));
        assert_eq!(model.sector.as_ref().map(Targets::len), Some(7));
        assert_eq!(model.asset_class.as_ref().map(Targets::len), Some(5));
        assert_relative_eq!(model.factors.get(Factor::Volatility), -0.2);
    }

    #[test]
    fn test_market_index_is_partial() {
        let index = Benchmark::market_index();
        assert!(index.currency.is_none());
        assert!(index.asset_class.is_none());
        assert_eq!(
            index.region.as_ref().and_then(|t| t.get(Region::NorthAmerica)),
            Some(71.0)
        );
        assert_relative_eq!(index.factors.get(Factor::Size), 0.2);
    }

    #[test]
    fn test_allocation_tables_sum_to_100() {
        let model = Benchmark::model_portfolio();
        let sum = |it: &mut dyn Iterator<Item = f64>| it.sum::<f64>();

        let currency = model.currency.as_ref().unwrap();
        assert_relative_eq!(sum(&mut currency.iter().map(|(_, w)| w)), 100.0);
        let asset_class = model.asset_class.as_ref().unwrap();
        assert_relative_eq!(sum(&mut asset_class.iter().map(|(_, w)| w)), 100.0);

        let index = Benchmark::market_index();
        let sector = index.sector.as_ref().unwrap();
        assert_relative_eq!(sum(&mut sector.iter().map(|(_, w)| w)), 100.0);
    }

    #[test]
    fn test_targets_missing_member() {
        let targets = Targets::new([(Currency::USD, 100.0)]);
        assert_eq!(targets.get(Currency::USD), Some(100.0));
        assert_eq!(targets.get(Currency::EUR), None);
    }

    #[test]
    fn test_serialize_skips_uncovered_dimensions() {
        let json = serde_json::to_value(Benchmark::market_index()).unwrap();
        assert_eq!(json["name"], "MSCI World");
        assert_eq!(json["kind"], "marketIndex");
        assert!(json.get("currency").is_none());
        assert_eq!(json["region"]["Emerging Markets"], 0.0);
        assert_eq!(json["factors"]["quality"], 0.15);
    }

    #[test]
    fn test_kind_lookup() {
        let all = Benchmark::all();
        assert_eq!(all[0].name, "Model portfolio");
        assert_eq!(all[1].name, "MSCI World");
        assert_eq!(BenchmarkKind::MarketIndex.to_string(), "index");
    }
}
