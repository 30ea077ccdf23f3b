//! Allocation and factor comparison against benchmarks.

use prism_core::{AssetClass, Category, Currency, Factor, Region, Sector};
use serde::Serialize;

use super::targets::{Benchmark, BenchmarkKind, Targets};
use crate::analytics::FactorExposure;
use crate::bucketing::{Allocations, Bucketed, Distribution};

/// Largest `|actual - target|` over the members the target set covers.
///
/// Members of `actual` without a target are ignored. Returns 0 for an empty
/// target set.
#[must_use]
pub fn max_absolute_deviation<C: Category>(actual: &Distribution<C>, targets: &Targets<C>) -> f64 {
    targets
        .iter()
        .map(|(category, target)| (actual.get(category) - target).abs())
        .fold(0.0, f64::max)
}

/// [`max_absolute_deviation`] against a benchmark's table for `C`.
///
/// A benchmark that does not cover the dimension contributes nothing and
/// yields 0.
#[must_use]
pub fn max_deviation_vs<C: Bucketed>(actual: &Distribution<C>, benchmark: &Benchmark) -> f64 {
    C::targets(benchmark).map_or(0.0, |targets| max_absolute_deviation(actual, targets))
}

/// One display row of an allocation comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviationRow<C: Category> {
    /// The category member.
    pub category: C,
    /// Actual weight.
    pub actual: f64,
    /// Benchmark weight, 0 when the benchmark has no target.
    pub benchmark: f64,
    /// Signed `actual - benchmark`.
    pub deviation: f64,
}

/// Per-member signed deviations, keyed by the actual distribution.
#[must_use]
pub fn allocation_rows<C: Category>(
    actual: &Distribution<C>,
    targets: Option<&Targets<C>>,
) -> Vec<DeviationRow<C>> {
    actual
        .iter()
        .map(|(category, weight)| {
            let benchmark = targets.and_then(|t| t.get(category)).unwrap_or(0.0);
            DeviationRow {
                category,
                actual: weight,
                benchmark,
                deviation: weight - benchmark,
            }
        })
        .collect()
}

/// An actual distribution set against one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCard<C: Category> {
    /// Card title, e.g. "Region allocation".
    pub title: String,
    /// Benchmark the distribution is compared to.
    pub benchmark: BenchmarkKind,
    /// Display name of that benchmark.
    pub benchmark_name: &'static str,
    /// One row per member of the actual distribution.
    pub rows: Vec<DeviationRow<C>>,
    /// Largest absolute deviation over the benchmark's covered members.
    pub max_deviation: f64,
}

impl<C: Bucketed> AllocationCard<C> {
    /// Compares `actual` with `benchmark`.
    #[must_use]
    pub fn compare(actual: &Distribution<C>, benchmark: &'static Benchmark) -> Self {
        Self {
            title: format!("{} allocation", C::DIMENSION.title()),
            benchmark: benchmark.kind,
            benchmark_name: benchmark.name,
            rows: allocation_rows(actual, C::targets(benchmark)),
            max_deviation: max_deviation_vs(actual, benchmark),
        }
    }
}

/// The four allocation cards of a portfolio.
///
/// Currency and asset class are compared with the model portfolio; region
/// and sector with the market index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCards {
    /// Currency vs model portfolio.
    pub currency: AllocationCard<Currency>,
    /// Region vs market index.
    pub region: AllocationCard<Region>,
    /// Sector vs market index.
    pub sector: AllocationCard<Sector>,
    /// Asset class vs model portfolio.
    pub asset_class: AllocationCard<AssetClass>,
}

impl AllocationCards {
    /// Builds all four cards from the portfolio's distributions.
    #[must_use]
    pub fn from_allocations(allocations: &Allocations) -> Self {
        let model = Benchmark::model_portfolio();
        let index = Benchmark::market_index();
        Self {
            currency: AllocationCard::compare(&allocations.currency, model),
            region: AllocationCard::compare(&allocations.region, index),
            sector: AllocationCard::compare(&allocations.sector, index),
            asset_class: AllocationCard::compare(&allocations.asset_class, model),
        }
    }
}

/// One factor of the portfolio set against both benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorComparisonRow {
    /// The factor.
    pub factor: Factor,
    /// Portfolio exposure (rounded).
    pub portfolio: f64,
    /// Model portfolio target.
    pub model: f64,
    /// Market index target.
    pub index: f64,
    /// `portfolio - model`.
    pub delta_model: f64,
    /// `portfolio - index`.
    pub delta_index: f64,
}

/// Compares factor exposure with both benchmarks, one row per factor.
#[must_use]
pub fn factor_comparison(exposure: &FactorExposure) -> Vec<FactorComparisonRow> {
    let model = &Benchmark::model_portfolio().factors;
    let index = &Benchmark::market_index().factors;
    Factor::ALL
        .into_iter()
        .map(|factor| {
            let portfolio = exposure.get(factor);
            FactorComparisonRow {
                factor,
                portfolio,
                model: model.get(factor),
                index: index.get(factor),
                delta_model: portfolio - model.get(factor),
                delta_index: portfolio - index.get(factor),
            }
        })
        .collect()
}
