//! Weight distributions over a categorical dimension.

use prism_core::numeric::round_dp;
use prism_core::{AssetClass, Category, Currency, Region, Sector};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::benchmark::{Benchmark, Targets};
use crate::types::Holding;

/// A category that can be read off a holding.
///
/// Also tells the comparator which benchmark table covers the category.
pub trait Bucketed: Category {
    /// Returns the holding's member of this dimension.
    fn of(holding: &Holding) -> Self;

    /// Returns the benchmark's targets for this dimension, if it has any.
    fn targets(benchmark: &Benchmark) -> Option<&Targets<Self>>;
}

impl Bucketed for Currency {
    fn of(holding: &Holding) -> Self {
        holding.currency()
    }

    fn targets(benchmark: &Benchmark) -> Option<&Targets<Self>> {
        benchmark.currency.as_ref()
    }
}

impl Bucketed for Region {
    fn of(holding: &Holding) -> Self {
        holding.region()
    }

    fn targets(benchmark: &Benchmark) -> Option<&Targets<Self>> {
        benchmark.region.as_ref()
    }
}

impl Bucketed for Sector {
    fn of(holding: &Holding) -> Self {
        holding.sector()
    }

    fn targets(benchmark: &Benchmark) -> Option<&Targets<Self>> {
        benchmark.sector.as_ref()
    }
}

impl Bucketed for AssetClass {
    fn of(holding: &Holding) -> Self {
        holding.asset_class()
    }

    fn targets(benchmark: &Benchmark) -> Option<&Targets<Self>> {
        benchmark.asset_class.as_ref()
    }
}

/// Aggregated weight per member of a dimension.
///
/// The key set is always exactly `C::ALL`, in that order, including members
/// no holding maps to. Values are percentages rounded to 2 decimals; their
/// sum may drift from the input total by rounding and that drift is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<C: Category> {
    entries: Vec<(C, f64)>,
}

impl<C: Category> Distribution<C> {
    /// A distribution with every member at zero.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            entries: C::ALL.iter().map(|c| (*c, 0.0)).collect(),
        }
    }

    /// Returns the weight of a member.
    #[must_use]
    pub fn get(&self, category: C) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0.0, |(_, w)| *w)
    }

    /// Iterates `(member, weight)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the members in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = C> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Sum of the (rounded) bucket weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for an enumeration without members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Category> Serialize for Distribution<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, weight) in &self.entries {
            map.serialize_entry(category.label(), weight)?;
        }
        map.end()
    }
}

/// Sums holding weights per member of dimension `C`.
///
/// Accumulation is unrounded; each bucket is rounded to 2 decimals once at
/// the end.
#[must_use]
pub fn aggregate_by_dimension<C: Bucketed>(holdings: &[Holding]) -> Distribution<C> {
    let entries = C::ALL
        .iter()
        .map(|&category| {
            let total: f64 = holdings
                .iter()
                .filter(|h| C::of(h) == category)
                .map(Holding::weight)
                .sum();
            (category, round_dp(total, 2))
        })
        .collect();
    Distribution { entries }
}

/// Unrounded sum of all holding weights.
#[must_use]
pub fn total_weight(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::weight).sum()
}

/// The four category distributions of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocations {
    /// Weight by currency.
    pub currency: Distribution<Currency>,
    /// Weight by region.
    pub region: Distribution<Region>,
    /// Weight by sector.
    pub sector: Distribution<Sector>,
    /// Weight by asset class.
    pub asset_class: Distribution<AssetClass>,
}

impl Allocations {
    /// Aggregates all four dimensions.
    #[must_use]
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        Self {
            currency: aggregate_by_dimension(holdings),
            region: aggregate_by_dimension(holdings),
            sector: aggregate_by_dimension(holdings),
            asset_class: aggregate_by_dimension(holdings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn holding(weight: f64, currency: Currency, asset_class: AssetClass) -> Holding {
        Holding::builder("h")
            .weight(weight)
            .currency(currency)
            .asset_class(asset_class)
            .build()
    }

    #[test]
    fn test_empty_holdings_give_all_zero_distribution() {
        let dist: Distribution<Sector> = aggregate_by_dimension(&[]);
        assert_eq!(dist.len(), Sector::ALL.len());
        assert!(dist.iter().all(|(_, w)| w == 0.0));
        assert_eq!(dist, Distribution::zeros());
    }

    #[test]
    fn test_bucket_rounding_follows_binary_value() {
        let dist: Distribution<Currency> =
            aggregate_by_dimension(&[holding(2.675, Currency::GBP, AssetClass::Equity)]);
        assert_eq!(dist.get(Currency::GBP), 2.67);

        let dist: Distribution<Currency> =
            aggregate_by_dimension(&[holding(0.125, Currency::GBP, AssetClass::Equity)]);
        assert_eq!(dist.get(Currency::GBP), 0.13);
    }

    #[test]
    fn test_sums_per_bucket() {
        let holdings = vec![
            holding(30.0, Currency::USD, AssetClass::Equity),
            holding(25.0, Currency::USD, AssetClass::FixedIncome),
            holding(15.0, Currency::EUR, AssetClass::Equity),
        ];
        let dist: Distribution<Currency> = aggregate_by_dimension(&holdings);

        assert_relative_eq!(dist.get(Currency::USD), 55.0);
        assert_relative_eq!(dist.get(Currency::EUR), 15.0);
        assert_relative_eq!(dist.get(Currency::JPY), 0.0);
        assert_relative_eq!(dist.total(), 70.0);

        let keys: Vec<_> = dist.keys().collect();
        assert_eq!(keys, Currency::ALL.to_vec());
    }

    #[test]
    fn test_rounds_once_at_the_end() {
        let third = 100.0 / 3.0;
        let holdings = vec![
            holding(third, Currency::GBP, AssetClass::Cash),
            holding(third, Currency::GBP, AssetClass::Cash),
        ];
        let dist: Distribution<Currency> = aggregate_by_dimension(&holdings);
        assert_relative_eq!(dist.get(Currency::GBP), 66.67);
    }

    #[test]
    fn test_serializes_as_label_map() {
        let holdings = vec![holding(100.0, Currency::USD, AssetClass::FixedIncome)];
        let allocations = Allocations::from_holdings(&holdings);
        let json = serde_json::to_value(&allocations).unwrap();

        assert_eq!(json["currency"]["USD"], 100.0);
        assert_eq!(json["currency"]["Other"], 0.0);
        assert_eq!(json["assetClass"]["Fixed Income"], 100.0);
        assert_eq!(json["region"]["North America"], 100.0);
        assert_eq!(json["sector"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_total_weight_is_unrounded() {
        let holdings = vec![
            holding(33.333, Currency::USD, AssetClass::Equity),
            holding(33.333, Currency::USD, AssetClass::Equity),
        ];
        assert_relative_eq!(total_weight(&holdings), 66.666);
    }
}
