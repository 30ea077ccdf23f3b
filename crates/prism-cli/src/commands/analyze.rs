//! Analyze command implementation.
//!
//! Loads a portfolio into a session, applies holding edits and renders the
//! derived allocation, factor and deviation views.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use prism_core::numeric::{format_fixed, format_signed};
use prism_core::records::{json_file_stem, RawPortfolio};
use prism_core::{Category, Factor};
use prism_portfolio::{
    AllocationCard, Bucketed, Holding, Portfolio, PortfolioAnalysis, PortfolioSession,
};

use crate::cli::OutputFormat;
use crate::commands::FieldEdit;
use crate::error::CliError;
use crate::output::{
    format_delta, format_percent, print_csv, print_header, print_json, print_table,
};
use crate::settings::Settings;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Portfolio id. Defaults to the first portfolio in the store.
    pub id: Option<String>,

    /// Read the portfolio from a JSON document instead of the store
    #[arg(long, conflicts_with = "id")]
    pub file: Option<PathBuf>,

    /// Append template holdings before editing
    #[arg(long, default_value_t = 0)]
    pub add: usize,

    /// Edit a holding field, e.g. `--set 0.weight=25` (repeatable)
    #[arg(long = "set", value_name = "INDEX.FIELD=VALUE")]
    pub edits: Vec<FieldEdit>,

    /// Remove the holding at INDEX after edits (repeatable)
    #[arg(long, value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// Show a single section
    #[arg(short, long, value_enum)]
    pub section: Option<Section>,
}

/// Report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Holding list
    Holdings,
    /// Health summary cards
    Health,
    /// Allocation vs benchmark cards
    Allocations,
    /// Factor exposure vs benchmarks
    Factors,
    /// Deviation flags
    Flags,
}

impl Section {
    fn shows(section: Option<Section>, this: Section) -> bool {
        section.map_or(true, |s| s == this)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport {
    portfolio: Option<Portfolio>,
    analysis: PortfolioAnalysis,
}

// =============================================================================
// ROWS
// =============================================================================

#[derive(Tabled, Serialize)]
struct HoldingRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Currency")]
    currency: &'static str,
    #[tabled(rename = "Region")]
    region: &'static str,
    #[tabled(rename = "Sector")]
    sector: &'static str,
    #[tabled(rename = "Asset class")]
    asset_class: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Quality")]
    quality: String,
    #[tabled(rename = "Momentum")]
    momentum: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Volatility")]
    volatility: String,
}

impl HoldingRow {
    fn new(index: usize, holding: &Holding) -> Self {
        let factors = holding.factors();
        let score = |f| format_fixed(factors.get(f), 2);
        Self {
            index,
            name: holding.name().to_string(),
            weight: format_percent(holding.weight()),
            currency: holding.currency().label(),
            region: holding.region().label(),
            sector: holding.sector().label(),
            asset_class: holding.asset_class().label(),
            value: score(Factor::Value),
            quality: score(Factor::Quality),
            momentum: score(Factor::Momentum),
            size: score(Factor::Size),
            volatility: score(Factor::Volatility),
        }
    }
}

#[derive(Tabled, Serialize)]
struct HealthRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

#[derive(Tabled, Serialize)]
struct AllocationRow {
    #[tabled(skip)]
    dimension: &'static str,
    #[tabled(rename = "Member")]
    member: &'static str,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Benchmark")]
    benchmark: String,
    #[tabled(rename = "Δ")]
    deviation: String,
}

fn allocation_rows<C: Bucketed>(card: &AllocationCard<C>) -> Vec<AllocationRow> {
    card.rows
        .iter()
        .map(|row| AllocationRow {
            dimension: C::DIMENSION.key(),
            member: row.category.label(),
            actual: format_percent(row.actual),
            benchmark: format_percent(row.benchmark),
            deviation: format_delta(row.deviation),
        })
        .collect()
}

#[derive(Tabled, Serialize)]
struct FactorRow {
    #[tabled(rename = "Factor")]
    factor: &'static str,
    #[tabled(rename = "Portfolio")]
    portfolio: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "MSCI World")]
    index: String,
    #[tabled(rename = "Δ vs model")]
    delta_model: String,
    #[tabled(rename = "Δ vs MSCI")]
    delta_index: String,
}

#[derive(Tabled, Serialize)]
struct FlagRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Table rows for every section of an analysis.
struct ReportRows {
    holdings: Vec<HoldingRow>,
    health: Vec<HealthRow>,
    allocations: Vec<(String, Vec<AllocationRow>)>,
    factors: Vec<FactorRow>,
    flags: Vec<FlagRow>,
}

impl ReportRows {
    fn build(holdings: &[Holding], analysis: &PortfolioAnalysis) -> Self {
        let cards = &analysis.allocation_cards;
        let card_title = |title: &str, benchmark: &str| format!("{title} vs {benchmark}");

        Self {
            holdings: holdings
                .iter()
                .enumerate()
                .map(|(i, h)| HoldingRow::new(i, h))
                .collect(),
            health: analysis
                .health
                .cards()
                .map(|card| HealthRow {
                    metric: card.title,
                    value: format_percent(card.value),
                    status: card.status.label(),
                })
                .collect(),
            allocations: vec![
                (
                    card_title(&cards.currency.title, cards.currency.benchmark_name),
                    allocation_rows(&cards.currency),
                ),
                (
                    card_title(&cards.region.title, cards.region.benchmark_name),
                    allocation_rows(&cards.region),
                ),
                (
                    card_title(&cards.sector.title, cards.sector.benchmark_name),
                    allocation_rows(&cards.sector),
                ),
                (
                    card_title(&cards.asset_class.title, cards.asset_class.benchmark_name),
                    allocation_rows(&cards.asset_class),
                ),
            ],
            factors: analysis
                .factor_comparison
                .iter()
                .map(|row| FactorRow {
                    factor: row.factor.title(),
                    portfolio: format_fixed(row.portfolio, 2),
                    model: format_fixed(row.model, 2),
                    index: format_fixed(row.index, 2),
                    delta_model: format_signed(row.delta_model, 2),
                    delta_index: format_signed(row.delta_index, 2),
                })
                .collect(),
            flags: analysis
                .flags
                .iter()
                .map(|flag| FlagRow {
                    kind: format!("{:?}", flag.kind),
                    message: flag.message.clone(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

async fn read_file(path: &Path) -> Result<(RawPortfolio, String), CliError> {
    let failed = |message: String| CliError::PortfolioFile {
        path: path.to_path_buf(),
        message,
    };
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| failed(e.to_string()))?;
    let raw: RawPortfolio = serde_json::from_str(&content).map_err(|e| failed(e.to_string()))?;
    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| json_file_stem(n).to_string())
        .unwrap_or_default();
    Ok((raw, stem))
}

/// Loads the requested portfolio into a fresh session.
///
/// With no id, the first listed portfolio is used; an empty store yields an
/// empty session.
async fn load_session(args: &AnalyzeArgs, settings: &Settings) -> Result<PortfolioSession> {
    let mut session = PortfolioSession::new(settings.analytics);

    if let Some(path) = &args.file {
        let (raw, fallback_id) = read_file(path).await?;
        session.load_raw(&raw, &fallback_id);
        return Ok(session);
    }

    let store = settings.open_store()?;
    let id = match &args.id {
        Some(id) => id.clone(),
        None => match store.list_portfolios().await?.into_iter().next() {
            Some(listing) => listing.id,
            None => {
                tracing::warn!(source = %store.source().source, "store has no portfolios");
                return Ok(session);
            }
        },
    };

    let raw = store.fetch_portfolio(&id).await?;
    session.load_raw(&raw, &id);
    tracing::info!(%id, holdings = session.holdings().len(), "portfolio loaded");
    Ok(session)
}

/// Applies `--add`, `--set` and `--remove` in that order.
///
/// Removal indices refer to the holdings after edits; they are applied from
/// the highest index down so earlier removals do not shift later ones.
fn apply_edits(session: &mut PortfolioSession, args: &AnalyzeArgs) -> Result<()> {
    for _ in 0..args.add {
        session.add_holding();
    }
    for edit in &args.edits {
        session.update_field(edit.index, edit.field, &edit.value)?;
    }

    let mut removals = args.remove.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        session.remove_holding(index)?;
    }
    Ok(())
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let mut session = load_session(&args, settings).await?;
    apply_edits(&mut session, &args)?;

    let analysis = session.snapshot();
    let section = args.section;

    match format {
        OutputFormat::Json => print_json(&AnalysisReport {
            portfolio: session.portfolio(),
            analysis,
        })?,
        OutputFormat::Minimal => {
            for flag in &analysis.flags {
                println!("{flag}");
            }
        }
        OutputFormat::Csv => {
            let rows = ReportRows::build(session.holdings(), &analysis);
            match section.unwrap_or(Section::Allocations) {
                Section::Holdings => print_csv(&rows.holdings)?,
                Section::Health => print_csv(&rows.health)?,
                Section::Allocations => {
                    let all: Vec<AllocationRow> =
                        rows.allocations.into_iter().flat_map(|(_, r)| r).collect();
                    print_csv(&all)?;
                }
                Section::Factors => print_csv(&rows.factors)?,
                Section::Flags => print_csv(&rows.flags)?,
            }
        }
        OutputFormat::Table => print_report(&session, &analysis, section)?,
    }

    Ok(())
}

fn print_report(
    session: &PortfolioSession,
    analysis: &PortfolioAnalysis,
    section: Option<Section>,
) -> Result<()> {
    let rows = ReportRows::build(session.holdings(), analysis);

    match session.listing() {
        Some(listing) => println!(
            "{} ({}, as of {})",
            listing.name.bold(),
            listing.id,
            listing.as_of
        ),
        None => println!("{}", "No portfolio selected".bold()),
    }

    if Section::shows(section, Section::Holdings) {
        print_header("Holdings");
        print_table(&rows.holdings)?;
    }
    if Section::shows(section, Section::Health) {
        print_header("Portfolio health");
        print_table(&rows.health)?;
    }
    if Section::shows(section, Section::Allocations) {
        for (title, card_rows) in &rows.allocations {
            print_header(title);
            print_table(card_rows)?;
        }
    }
    if Section::shows(section, Section::Factors) {
        print_header("Factor exposure");
        print_table(&rows.factors)?;
    }
    if Section::shows(section, Section::Flags) {
        print_header("Deviation flags");
        for flag in &analysis.flags {
            let marker = if flag.is_aligned() {
                "✓".green()
            } else {
                "⚠".yellow()
            };
            println!("{marker} {flag}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{AssetClass, Currency};
    use prism_portfolio::AnalyticsConfig;

    fn sample() -> Vec<Holding> {
        vec![
            Holding::builder("Core Equity")
                .weight(70.0)
                .currency(Currency::USD)
                .asset_class(AssetClass::Equity)
                .build(),
            Holding::builder("Bonds")
                .weight(30.0)
                .currency(Currency::EUR)
                .asset_class(AssetClass::FixedIncome)
                .build(),
        ]
    }

    #[test]
    fn test_rows_cover_all_sections() {
        let holdings = sample();
        let analysis = PortfolioAnalysis::calculate(&holdings, &AnalyticsConfig::default());
        let rows = ReportRows::build(&holdings, &analysis);

        assert_eq!(rows.holdings.len(), 2);
        assert_eq!(rows.holdings[1].weight, "30.0%");
        assert_eq!(rows.health.len(), 3);
        assert_eq!(rows.health[0].status, "Aligned");
        assert_eq!(rows.allocations.len(), 4);
        assert_eq!(rows.allocations[0].0, "Currency allocation vs Model portfolio");
        assert_eq!(rows.allocations[1].0, "Region allocation vs MSCI World");
        assert_eq!(rows.factors.len(), 5);
        assert!(!rows.flags.is_empty());
    }

    #[test]
    fn test_currency_rows_show_signed_deviation() {
        let holdings = sample();
        let analysis = PortfolioAnalysis::calculate(&holdings, &AnalyticsConfig::default());
        let rows = allocation_rows(&analysis.allocation_cards.currency);

        let usd = rows.iter().find(|r| r.member == "USD").unwrap();
        assert_eq!(usd.actual, "70.0%");
        assert_eq!(usd.benchmark, "55.0%");
        assert_eq!(usd.deviation, "+15.0%");
    }

    #[test]
    fn test_apply_edits_order() {
        let mut session = PortfolioSession::default();
        session.load(Portfolio::new(
            prism_core::records::PortfolioListing {
                id: "p".into(),
                name: "P".into(),
                as_of: "unknown".into(),
            },
            sample(),
        ));
        let args = AnalyzeArgs {
            id: None,
            file: None,
            add: 1,
            edits: vec!["2.weight=5".parse().unwrap()],
            remove: vec![0, 0],
            section: None,
        };

        apply_edits(&mut session, &args).unwrap();
        let names: Vec<&str> = session.holdings().iter().map(Holding::name).collect();
        assert_eq!(names, vec!["Bonds", "New Holding"]);
        assert_eq!(session.holdings()[1].weight(), 5.0);
    }

    #[test]
    fn test_apply_edits_rejects_bad_index() {
        let mut session = PortfolioSession::default();
        let args = AnalyzeArgs {
            id: None,
            file: None,
            add: 0,
            edits: vec![],
            remove: vec![3],
            section: None,
        };
        assert!(apply_edits(&mut session, &args).is_err());
    }
}
