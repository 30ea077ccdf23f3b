//! Source command implementation.
//!
//! Reports which portfolio store is active.

use anyhow::Result;

use prism_traits::{SourceInfo, SourceKind};

use crate::cli::OutputFormat;
use crate::output::{print_json, print_output, KeyValue};
use crate::settings::Settings;

/// One-line description of the active source.
pub fn status_line(info: &SourceInfo) -> String {
    match info.source {
        SourceKind::AzureDatalake => format!(
            "Data source: Azure Data Lake ({}/{}/{})",
            info.detail("account").unwrap_or_default(),
            info.detail("filesystem").unwrap_or_default(),
            info.detail("directory").unwrap_or_default(),
        ),
        SourceKind::LocalDirectory => format!(
            "Data source: local directory ({})",
            info.detail("directory").unwrap_or_default()
        ),
        SourceKind::FallbackLocal => {
            "Data source: fallback sample (set Azure env vars to use Data Lake).".to_string()
        }
    }
}

/// Execute the source command.
pub fn execute(settings: &Settings, format: OutputFormat) -> Result<()> {
    let store = settings.open_store()?;
    let info = store.source();

    match format {
        OutputFormat::Minimal => println!("{}", info.source),
        OutputFormat::Json => print_json(&info)?,
        OutputFormat::Table => {
            println!("{}", status_line(&info));
            print_output(&rows(&info), format)?;
        }
        OutputFormat::Csv => print_output(&rows(&info), format)?,
    }

    Ok(())
}

fn rows(info: &SourceInfo) -> Vec<KeyValue> {
    std::iter::once(KeyValue::new("source", info.source.as_str()))
        .chain(info.details.iter().map(|(k, v)| KeyValue::new(k, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let info = SourceInfo::new(SourceKind::AzureDatalake)
            .with_detail("account", "acct")
            .with_detail("filesystem", "fs")
            .with_detail("directory", "portfolios");
        assert_eq!(
            status_line(&info),
            "Data source: Azure Data Lake (acct/fs/portfolios)"
        );

        let info = SourceInfo::new(SourceKind::FallbackLocal);
        assert!(status_line(&info).contains("fallback sample"));
    }
}
