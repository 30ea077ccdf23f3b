//! Benchmarks command implementation.
//!
//! Prints the static benchmark target tables.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use prism_core::numeric::format_fixed;
use prism_core::Category;
use prism_portfolio::{Benchmark, BenchmarkKind, Targets};

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_csv, print_header, print_json, print_table};

/// Arguments for the benchmarks command.
#[derive(Args, Debug)]
pub struct BenchmarksArgs {
    /// Show only one benchmark
    #[arg(short, long, value_enum)]
    pub kind: Option<BenchmarkChoice>,
}

/// Benchmark selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BenchmarkChoice {
    /// Model portfolio
    Model,
    /// MSCI World market index
    Index,
}

impl From<BenchmarkChoice> for BenchmarkKind {
    fn from(choice: BenchmarkChoice) -> Self {
        match choice {
            BenchmarkChoice::Model => BenchmarkKind::ModelPortfolio,
            BenchmarkChoice::Index => BenchmarkKind::MarketIndex,
        }
    }
}

#[derive(Tabled, Serialize)]
struct TargetRow {
    #[tabled(skip)]
    benchmark: &'static str,
    #[tabled(rename = "Dimension")]
    dimension: &'static str,
    #[tabled(rename = "Member")]
    member: &'static str,
    #[tabled(rename = "Target")]
    target: String,
}

fn push_allocation_rows<C: Category>(
    benchmark: &'static Benchmark,
    targets: Option<&Targets<C>>,
    rows: &mut Vec<TargetRow>,
) {
    let Some(targets) = targets else {
        return;
    };
    rows.extend(targets.iter().map(|(member, weight)| TargetRow {
        benchmark: benchmark.name,
        dimension: C::DIMENSION.title(),
        member: member.label(),
        target: format_percent(weight),
    }));
}

fn target_rows(benchmark: &'static Benchmark) -> Vec<TargetRow> {
    let mut rows = Vec::new();
    push_allocation_rows(benchmark, benchmark.currency.as_ref(), &mut rows);
    push_allocation_rows(benchmark, benchmark.region.as_ref(), &mut rows);
    push_allocation_rows(benchmark, benchmark.sector.as_ref(), &mut rows);
    push_allocation_rows(benchmark, benchmark.asset_class.as_ref(), &mut rows);
    rows.extend(benchmark.factors.iter().map(|(factor, score)| TargetRow {
        benchmark: benchmark.name,
        dimension: "Factor",
        member: factor.title(),
        target: format_fixed(score, 2),
    }));
    rows
}

/// Execute the benchmarks command.
pub fn execute(args: BenchmarksArgs, format: OutputFormat) -> Result<()> {
    let selected: Vec<&'static Benchmark> = match args.kind {
        Some(choice) => vec![BenchmarkKind::from(choice).benchmark()],
        None => Benchmark::all().to_vec(),
    };

    match format {
        OutputFormat::Minimal => {
            for benchmark in &selected {
                println!("{}: {}", benchmark.name, benchmark.description);
            }
        }
        OutputFormat::Json => print_json(&selected)?,
        OutputFormat::Csv => {
            let rows: Vec<TargetRow> = selected.iter().copied().flat_map(target_rows).collect();
            print_csv(&rows)?;
        }
        OutputFormat::Table => {
            for &benchmark in &selected {
                print_header(&format!("{} ({})", benchmark.name, benchmark.description));
                print_table(&target_rows(benchmark))?;
            }
        }
    }

    Ok(())
}
