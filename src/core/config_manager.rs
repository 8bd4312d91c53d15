// src/core/config_manager.rs
//! Client configuration: environment variables over `config.yaml` over defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::api_client::{ApiClient, DEFAULT_BASE_URL};
use super::fs_ops::FsOps;
use super::preferences::PreferenceStore;
use super::token_store::TokenStore;
use crate::environment::EnvironmentConfig;

pub const DEFAULT_EMAIL_DOMAIN: &str = "@snu.ac.kr";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const LOG_FILE: &str = "internhasha.log";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    /// Appended to the email id typed at sign-up and sign-in
    pub email_domain: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl ConfigManager {
    /// Load configuration, reading overrides from `config_path` when it exists
    pub fn load(config_path: &Path) -> Result<Self> {
        let file = EnvironmentConfig::load(config_path)?;

        let base_url = std::env::var("INTERNHASHA_API_URL")
            .ok()
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = match std::env::var("INTERNHASHA_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("INTERNHASHA_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let data_dir = std::env::var("INTERNHASHA_HOME")
            .ok()
            .map(PathBuf::from)
            .or(file.data_path)
            .unwrap_or_else(Self::default_data_dir);

        let email_domain = file
            .email_domain
            .unwrap_or_else(|| DEFAULT_EMAIL_DOMAIN.to_string());

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_seconds,
            },
            storage: StorageConfig { data_dir },
            email_domain,
        })
    }

    /// Configuration with defaults only, rooted at `data_dir`
    pub fn with_data_dir(base_url: &str, data_dir: PathBuf) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.to_string(),
                timeout_seconds: DEFAULT_TIMEOUT_SECS,
            },
            storage: StorageConfig { data_dir },
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }

    fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("internhasha"))
            .unwrap_or_else(|| PathBuf::from(".internhasha"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.storage.data_dir.join(LOG_FILE)
    }

    /// Full email address for an email id typed without a domain
    pub fn email_for(&self, email_id: &str) -> String {
        let email_id = email_id.trim();
        if email_id.contains('@') {
            email_id.to_string()
        } else {
            format!("{}{}", email_id, self.email_domain)
        }
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.storage.data_dir).await
    }

    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(self.api.base_url.clone(), self.api.timeout_seconds)
            .context("Failed to create HTTP client")
    }

    pub fn token_store(&self) -> TokenStore {
        TokenStore::new(&self.storage.data_dir)
    }

    pub fn preference_store(&self) -> PreferenceStore {
        PreferenceStore::new(&self.storage.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_for_appends_domain() {
        let config = ConfigManager::with_data_dir(DEFAULT_BASE_URL, PathBuf::from("/tmp/x"));
        assert_eq!(config.email_for("kim"), "kim@snu.ac.kr");
        assert_eq!(config.email_for(" kim@example.com "), "kim@example.com");
    }
}
