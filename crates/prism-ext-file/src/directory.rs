//! Directory of portfolio JSON files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use prism_core::records::{PortfolioListing, RawPortfolio};
use prism_traits::error::TraitError;
use prism_traits::store::{PortfolioStore, SourceInfo, SourceKind};

/// Store backed by a local directory of `<id>.json` files.
///
/// Only regular files directly inside the directory are considered.
#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    directory: PathBuf,
}

impl JsonDirectoryStore {
    /// Creates a store over `directory`. The directory is read lazily.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The directory being served.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File names of the portfolio documents, sorted.
    pub async fn file_names(&self) -> Result<Vec<String>, TraitError> {
        let mut entries = tokio::fs::read_dir(&self.directory).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(".json") {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    async fn read_document(&self, file_name: &str) -> Result<RawPortfolio, TraitError> {
        let path = self.directory.join(file_name);
        let bytes = tokio::fs::read(&path).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| TraitError::ParseError(format!("{}: {e}", path.display())))
    }
}

fn is_plain_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && id != "." && id != ".."
}

#[async_trait]
impl PortfolioStore for JsonDirectoryStore {
    fn source(&self) -> SourceInfo {
        SourceInfo::new(SourceKind::LocalDirectory)
            .with_detail("directory", self.directory.display().to_string())
    }

    async fn list_portfolios(&self) -> Result<Vec<PortfolioListing>, TraitError> {
        let names = self.file_names().await?;
        tracing::debug!(directory = %self.directory.display(), files = names.len(), "listing portfolios");

        let mut listings = Vec::with_capacity(names.len());
        for name in &names {
            let document = self.read_document(name).await.map_err(|e| {
                tracing::warn!(file = %name, error = %e, "failed to read portfolio file");
                e
            })?;
            listings.push(document.listing_for_file(name));
        }
        Ok(listings)
    }

    async fn fetch_portfolio(&self, id: &str) -> Result<RawPortfolio, TraitError> {
        let file_name = format!("{id}.json");
        let exists = is_plain_id(id)
            && tokio::fs::metadata(self.directory.join(&file_name))
                .await
                .is_ok_and(|m| m.is_file());
        if !exists {
            return Err(TraitError::not_found(format!("Portfolio '{id}' not found.")));
        }
        tracing::debug!(id, directory = %self.directory.display(), "fetching portfolio file");
        self.read_document(&file_name).await
    }
}
