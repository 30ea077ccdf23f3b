//! Benchmarks for the prism-portfolio analysis pipeline.
//!
//! Run with: cargo bench -p prism-portfolio

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use prism_portfolio::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_raw_holding(id: usize) -> RawHolding {
    let currencies = ["USD", "EUR", "GBP", "JPY", "CHF"];
    let regions = ["North America", "Europe", "Asia Pacific", "Emerging Markets"];
    let sectors = ["Technology", "Financials", "Healthcare", "Energy", "Utilities"];
    let classes = ["Equity", "Fixed Income", "Cash", "Commodities"];

    serde_json::from_value(json!({
        "name": format!("Holding {id:05}"),
        "weight": (id % 7) as f64 * 0.5,
        "currency": currencies[id % currencies.len()],
        "region": regions[id % regions.len()],
        "sector": sectors[id % sectors.len()],
        "assetClass": classes[id % classes.len()],
        "value": ((id % 30) as f64 / 10.0) - 1.5,
        "quality": format!("{}", ((id % 11) as f64 / 10.0) - 0.5),
        "momentum": 0.3,
        "size": -0.1,
        "volatility": null
    }))
    .unwrap_or_default()
}

fn create_holdings(n: usize) -> Vec<Holding> {
    let raws: Vec<RawHolding> = (0..n).map(create_raw_holding).collect();
    normalize_holdings(&raws)
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [10usize, 100, 1000] {
        let raws: Vec<RawHolding> = (0..size).map(create_raw_holding).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &raws, |b, raws| {
            b.iter(|| normalize_holdings(black_box(raws)));
        });
    }
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let config = AnalyticsConfig::default();

    for size in [10usize, 100, 1000] {
        let holdings = create_holdings(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &holdings, |b, holdings| {
            b.iter(|| analyze(black_box(holdings), &config));
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let holdings = create_holdings(500);
    let mut group = c.benchmark_group("components");

    group.bench_function("allocations", |b| {
        b.iter(|| Allocations::from_holdings(black_box(&holdings)));
    });
    group.bench_function("factor_exposure", |b| {
        b.iter(|| factor_exposure(black_box(&holdings)));
    });
    group.bench_function("flags", |b| {
        b.iter(|| evaluate_flags(black_box(&holdings), &DeviationThresholds::default()));
    });
    group.finish();
}

fn bench_session_edit(c: &mut Criterion) {
    let mut session = PortfolioSession::default();
    for holding in create_holdings(100) {
        session.push_holding(holding);
    }

    c.bench_function("session_update_weight", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % 100;
            let weight = json!((i % 5) as f64);
            session.update_field_by_key(i, "weight", black_box(&weight))
        });
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_analysis,
    bench_components,
    bench_session_edit
);
criterion_main!(benches);
