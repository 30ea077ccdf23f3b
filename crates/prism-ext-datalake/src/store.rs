//! Data Lake REST store.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use prism_core::records::{PortfolioListing, RawPortfolio};
use prism_traits::error::TraitError;
use prism_traits::store::{PortfolioStore, SourceInfo, SourceKind};

use crate::config::DataLakeConfig;

/// Service name used in request failures.
pub const AZURE_SERVICE: &str = "Azure";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// ENDPOINTS
// =============================================================================

fn filesystem_url(config: &DataLakeConfig) -> Result<Url, TraitError> {
    let endpoint = config.endpoint();
    let mut url = Url::parse(&endpoint).map_err(|e| {
        TraitError::configuration(format!("invalid Data Lake endpoint '{endpoint}': {e}"))
    })?;
    url.path_segments_mut()
        .map_err(|()| TraitError::configuration("storage endpoint cannot hold a path"))?
        .pop_if_empty()
        .push(&config.filesystem);
    Ok(url)
}

fn append_sas(url: &mut Url, sas_token: &str) {
    if sas_token.is_empty() {
        return;
    }
    let query = match url.query() {
        Some(q) if !q.is_empty() => format!("{q}&{sas_token}"),
        _ => sas_token.to_string(),
    };
    url.set_query(Some(&query));
}

/// URL listing the configured directory (non-recursive).
pub fn list_url(config: &DataLakeConfig) -> Result<Url, TraitError> {
    let mut url = filesystem_url(config)?;
    url.query_pairs_mut()
        .append_pair("resource", "filesystem")
        .append_pair("directory", &config.directory)
        .append_pair("recursive", "false");
    append_sas(&mut url, &config.sas_token);
    Ok(url)
}

/// URL reading `file_name` from the configured directory.
pub fn file_url(config: &DataLakeConfig, file_name: &str) -> Result<Url, TraitError> {
    let mut url = filesystem_url(config)?;
    url.path_segments_mut()
        .map_err(|()| TraitError::configuration("storage endpoint cannot hold a path"))?
        .push(&config.directory)
        .push(file_name);
    append_sas(&mut url, &config.sas_token);
    Ok(url)
}

// =============================================================================
// LIST RESPONSE
// =============================================================================

#[derive(Debug, Deserialize)]
struct PathList {
    #[serde(default)]
    paths: Vec<PathEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PathEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    is_directory: Value,
}

/// Extracts portfolio file names from a path-list response body.
///
/// Directories and non-`.json` entries are skipped; names are reduced to
/// their last path segment.
pub fn parse_file_names(body: &str) -> Result<Vec<String>, TraitError> {
    let list: PathList = serde_json::from_str(body)?;
    Ok(list
        .paths
        .into_iter()
        .filter(|p| p.is_directory != "true" && p.name.ends_with(".json"))
        .filter_map(|p| p.name.rsplit('/').next().map(str::to_string))
        .collect())
}

// =============================================================================
// STORE
// =============================================================================

/// Store reading portfolio documents from a Data Lake directory.
#[derive(Debug, Clone)]
pub struct DataLakeStore {
    config: DataLakeConfig,
    client: Client,
}

impl DataLakeStore {
    /// Creates a store with its own HTTP client.
    pub fn new(config: DataLakeConfig) -> Result<Self, TraitError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TraitError::configuration(format!("HTTP client: {e}")))?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a store sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(config: DataLakeConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// The connection settings.
    #[must_use]
    pub fn config(&self) -> &DataLakeConfig {
        &self.config
    }

    async fn get_text(&self, url: Url) -> Result<String, TraitError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TraitError::ConnectionFailed(e.without_url().to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TraitError::ConnectionFailed(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::warn!(
                account = %self.config.account,
                status = status.as_u16(),
                "Data Lake request failed"
            );
            return Err(TraitError::request_failed(
                AZURE_SERVICE,
                status.as_u16(),
                &text,
            ));
        }
        Ok(text)
    }

    /// Portfolio file names in the configured directory.
    pub async fn file_names(&self) -> Result<Vec<String>, TraitError> {
        let body = self.get_text(list_url(&self.config)?).await?;
        parse_file_names(&body)
    }

    async fn read_file(&self, file_name: &str) -> Result<RawPortfolio, TraitError> {
        let body = self.get_text(file_url(&self.config, file_name)?).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PortfolioStore for DataLakeStore {
    fn source(&self) -> SourceInfo {
        SourceInfo::new(SourceKind::AzureDatalake)
            .with_detail("account", &self.config.account)
            .with_detail("filesystem", &self.config.filesystem)
            .with_detail("directory", &self.config.directory)
    }

    async fn list_portfolios(&self) -> Result<Vec<PortfolioListing>, TraitError> {
        let names = self.file_names().await?;
        tracing::debug!(
            filesystem = %self.config.filesystem,
            directory = %self.config.directory,
            files = names.len(),
            "listing Data Lake portfolios"
        );

        try_join_all(names.iter().map(|name| async move {
            let document = self.read_file(name).await?;
            Ok::<_, TraitError>(document.listing_for_file(name))
        }))
        .await
    }

    async fn fetch_portfolio(&self, id: &str) -> Result<RawPortfolio, TraitError> {
        tracing::debug!(id, directory = %self.config.directory, "fetching Data Lake portfolio");
        self.read_file(&format!("{id}.json")).await
    }
}
