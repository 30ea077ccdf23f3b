//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, BenchmarksArgs};

/// Prism - Portfolio allocation and style-factor lens
#[derive(Parser)]
#[command(name = "prism")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./prism.toml when present)
    #[arg(short, long, env = "PRISM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the active portfolio store
    Source,

    /// List the portfolios available in the store
    List,

    /// Show the benchmark targets
    Benchmarks(BenchmarksArgs),

    /// Load a portfolio, apply edits and show its allocation and factor analysis
    Analyze(AnalyzeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline values)
    Minimal,
}
