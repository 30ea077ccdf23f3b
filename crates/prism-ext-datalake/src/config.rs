//! Data Lake connection settings.

use serde::{Deserialize, Serialize};

/// Storage account name variable.
pub const ENV_ACCOUNT: &str = "AZURE_STORAGE_ACCOUNT";
/// SAS token variable.
pub const ENV_SAS_TOKEN: &str = "AZURE_STORAGE_SAS_TOKEN";
/// Filesystem (container) variable.
pub const ENV_FILESYSTEM: &str = "AZURE_DATALAKE_FILESYSTEM";
/// Directory variable.
pub const ENV_DIRECTORY: &str = "AZURE_DATALAKE_DIRECTORY";

/// Directory used when [`ENV_DIRECTORY`] is unset.
pub const DEFAULT_DIRECTORY: &str = "portfolios";

/// Connection settings for a Data Lake filesystem directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLakeConfig {
    /// Storage account name.
    pub account: String,
    /// SAS token without a leading `?`.
    #[serde(skip_serializing)]
    pub sas_token: String,
    /// Filesystem (container) name.
    pub filesystem: String,
    /// Directory holding the portfolio files.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// DFS endpoint override; the account's public endpoint when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_directory() -> String {
    DEFAULT_DIRECTORY.to_string()
}

impl DataLakeConfig {
    /// Creates settings for `account`/`filesystem` with the default directory.
    pub fn new(
        account: impl Into<String>,
        sas_token: impl AsRef<str>,
        filesystem: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            sas_token: normalize_sas_token(sas_token.as_ref()).to_string(),
            filesystem: filesystem.into(),
            directory: default_directory(),
            endpoint: None,
        }
    }

    /// Points the store at another DFS endpoint, such as an emulator.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The DFS endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.dfs.core.windows.net/", self.account),
        }
    }

    /// Sets the directory.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Reads the settings from the process environment.
    ///
    /// Returns `None` unless account, SAS token and filesystem are all set
    /// and non-empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`, with the same rules as
    /// [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let account = present(ENV_ACCOUNT)?;
        let sas_token = present(ENV_SAS_TOKEN)?;
        let filesystem = present(ENV_FILESYSTEM)?;
        let config = Self::new(account, sas_token, filesystem);

        Some(match present(ENV_DIRECTORY) {
            Some(directory) => config.with_directory(directory),
            None => config,
        })
    }
}

/// Strips one leading `?` from a SAS token.
#[must_use]
pub fn normalize_sas_token(raw: &str) -> &str {
    raw.strip_prefix('?').unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_normalize_sas_token() {
        assert_eq!(normalize_sas_token("?sv=2024&sig=abc"), "sv=2024&sig=abc");
        assert_eq!(normalize_sas_token("sv=2024"), "sv=2024");
        assert_eq!(normalize_sas_token(""), "");
    }

    #[test]
    fn test_from_lookup_requires_three_vars() {
        let partial = lookup(&[(ENV_ACCOUNT, "acct"), (ENV_SAS_TOKEN, "sig=1")]);
        assert!(DataLakeConfig::from_lookup(partial).is_none());

        let empty = lookup(&[
            (ENV_ACCOUNT, "acct"),
            (ENV_SAS_TOKEN, ""),
            (ENV_FILESYSTEM, "fs"),
        ]);
        assert!(DataLakeConfig::from_lookup(empty).is_none());
    }

    #[test]
    fn test_from_lookup_defaults_directory() {
        let vars = lookup(&[
            (ENV_ACCOUNT, "acct"),
            (ENV_SAS_TOKEN, "?sig=1"),
            (ENV_FILESYSTEM, "fs"),
        ]);
        let config = DataLakeConfig::from_lookup(vars).unwrap();
        assert_eq!(config.account, "acct");
        assert_eq!(config.sas_token, "sig=1");
        assert_eq!(config.filesystem, "fs");
        assert_eq!(config.directory, "portfolios");
        assert_eq!(config.endpoint(), "https://acct.dfs.core.windows.net/");
    }

    #[test]
    fn test_endpoint_override() {
        let config =
            DataLakeConfig::new("acct", "sig=1", "fs").with_endpoint("http://127.0.0.1:10004/");
        assert_eq!(config.endpoint(), "http://127.0.0.1:10004/");
        assert_eq!(config.account, "acct");
    }

    #[test]
    fn test_from_lookup_directory_override() {
        let vars = lookup(&[
            (ENV_ACCOUNT, "acct"),
            (ENV_SAS_TOKEN, "sig=1"),
            (ENV_FILESYSTEM, "fs"),
            (ENV_DIRECTORY, "models"),
        ]);
        let config = DataLakeConfig::from_lookup(vars).unwrap();
        assert_eq!(config.directory, "models");
    }

    #[test]
    fn test_token_not_serialized() {
        let config = DataLakeConfig::new("acct", "sig=secret", "fs");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
