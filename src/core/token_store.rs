// src/core/token_store.rs
//! Persisted bearer token, the CLI's counterpart of the `token` cookie

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::fs_ops::FsOps;

const TOKEN_FILE: &str = "token";

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    /// Stored token, if any. A blank file counts as no token.
    pub async fn get(&self) -> Result<Option<String>> {
        let content = FsOps::read_optional(&self.path).await?;
        Ok(content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()))
    }

    pub async fn set(&self, token: &str) -> Result<()> {
        FsOps::write_file_private(&self.path, token.trim()).await
    }

    pub async fn remove(&self) -> Result<()> {
        FsOps::remove_file_if_exists(&self.path).await
    }
}
