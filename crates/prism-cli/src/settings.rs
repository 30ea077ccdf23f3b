//! Configuration file and portfolio store selection.
//!
//! ```toml
//! [source]
//! kind = "directory"          # "fallback" | "directory" | "datalake"
//! directory = "./portfolios"
//!
//! [analytics.thresholds]
//! asset_class = 10.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use prism_ext_datalake::{DataLakeConfig, DataLakeStore, ENV_ACCOUNT, ENV_FILESYSTEM, ENV_SAS_TOKEN};
use prism_ext_file::{FallbackStore, JsonDirectoryStore};
use prism_portfolio::AnalyticsConfig;
use prism_traits::PortfolioStore;

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "prism.toml";

/// Portfolio store implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Built-in sample portfolio.
    Fallback,
    /// Directory of JSON documents.
    Directory,
    /// Azure Data Lake directory.
    Datalake,
}

/// The `[source]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSettings {
    /// Explicit store; chosen from the environment when absent.
    pub kind: Option<StoreKind>,
    /// Directory for the directory store.
    pub directory: Option<PathBuf>,
}

/// CLI settings loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Store selection.
    pub source: SourceSettings,
    /// Flag thresholds and health bands.
    pub analytics: AnalyticsConfig,
}

impl Settings {
    /// Loads settings from `path`, or from `./prism.toml` when it exists.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads a TOML settings file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?;
        let settings = Self::from_toml(&content)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parses TOML settings.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the store kind.
    ///
    /// An explicit `kind` wins. Otherwise a complete Data Lake environment
    /// selects the Data Lake, then a configured directory, then the fallback.
    #[must_use]
    pub fn store_kind(&self, datalake: Option<&DataLakeConfig>) -> StoreKind {
        match (self.source.kind, datalake, &self.source.directory) {
            (Some(kind), _, _) => kind,
            (None, Some(_), _) => StoreKind::Datalake,
            (None, None, Some(_)) => StoreKind::Directory,
            (None, None, None) => StoreKind::Fallback,
        }
    }

    /// Opens the configured store.
    pub fn open_store(&self) -> CliResult<Box<dyn PortfolioStore>> {
        let datalake = DataLakeConfig::from_env();
        let kind = self.store_kind(datalake.as_ref());
        tracing::debug!(?kind, "opening portfolio store");

        match kind {
            StoreKind::Fallback => Ok(Box::new(FallbackStore::new())),
            StoreKind::Directory => {
                let directory = self.source.directory.as_ref().ok_or_else(|| {
                    CliError::config("source.kind = \"directory\" requires source.directory")
                })?;
                Ok(Box::new(JsonDirectoryStore::new(directory)))
            }
            StoreKind::Datalake => {
                let config = datalake.ok_or_else(|| {
                    CliError::config(format!(
                        "source.kind = \"datalake\" requires {ENV_ACCOUNT}, {ENV_SAS_TOKEN} and {ENV_FILESYSTEM}"
                    ))
                })?;
                let store = DataLakeStore::new(config).map_err(|e| CliError::config(e.to_string()))?;
                Ok(Box::new(store))
            }
        }
    }
}
