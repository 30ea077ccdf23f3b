//! Prism CLI - Portfolio allocation and style-factor lens.
//!
//! # Usage
//!
//! ```bash
//! # Show which portfolio store is active
//! prism source
//!
//! # List the portfolios in the store
//! prism list
//!
//! # Analyze a portfolio
//! prism analyze growth-model
//!
//! # Try an edit without touching the stored document
//! prism analyze growth-model --set 3.weight=35 --remove 4
//!
//! # Analyze a local document
//! prism analyze --file ./balanced.json --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use settings::Settings;

const DEFAULT_LOG_FILTER: &str = "warn,prism=info";

fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let settings = Settings::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Source => commands::source::execute(&settings, format)?,
        Commands::List => commands::list::execute(&settings, format).await?,
        Commands::Benchmarks(args) => commands::benchmarks::execute(args, format)?,
        Commands::Analyze(args) => commands::analyze::execute(args, &settings, format).await?,
    }

    Ok(())
}
