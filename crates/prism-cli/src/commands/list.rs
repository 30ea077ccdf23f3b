//! List command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use prism_core::records::PortfolioListing;

use crate::cli::OutputFormat;
use crate::output::{print_json, print_output};
use crate::settings::Settings;

#[derive(Tabled, Serialize)]
struct ListingRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "As of")]
    #[serde(rename = "asOf")]
    as_of: String,
}

impl From<&PortfolioListing> for ListingRow {
    fn from(listing: &PortfolioListing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            as_of: listing.as_of.clone(),
        }
    }
}

/// Execute the list command.
pub async fn execute(settings: &Settings, format: OutputFormat) -> Result<()> {
    let store = settings.open_store()?;
    let listings = store.list_portfolios().await?;
    tracing::info!(source = %store.source().source, count = listings.len(), "listed portfolios");

    match format {
        OutputFormat::Minimal => {
            for listing in &listings {
                println!("{}", listing.id);
            }
        }
        OutputFormat::Json => print_json(&listings)?,
        _ => {
            let rows: Vec<ListingRow> = listings.iter().map(ListingRow::from).collect();
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
