// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-environment overrides read from `config.yaml`. Every field is optional;
/// environment variables and built-in defaults fill the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub api_base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub data_path: Option<PathBuf>,
    pub email_domain: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load the section matching the current environment from `path`,
    /// or empty overrides when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_file(path, &Self::get_environment())
    }

    pub fn get_environment() -> String {
        std::env::var("INTERNHASHA_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let config_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&config_content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        let mut env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        if let Some(data_path) = env_config.data_path.take() {
            env_config.data_path = Some(Self::resolve_path(&data_path)?);
        }
        Ok(env_config)
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
