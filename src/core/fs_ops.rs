// src/core/fs_ops.rs
//! File operations shared by the token and preference stores

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            debug!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Read a file, treating a missing file as `None`
    pub async fn read_optional(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        debug!("Written file: {}", path.display());
        Ok(())
    }

    /// Write a file only the current user can read. On unix the file is
    /// created with mode 0600, and an existing file is narrowed before writing.
    pub async fn write_file_private(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options
            .open(path)
            .await
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await
                .with_context(|| format!("Failed to restrict permissions on {}", path.display()))?;
        }

        file.write_all(content.as_bytes())
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        file.flush()
            .await
            .with_context(|| format!("Failed to flush file: {}", path.display()))?;

        debug!("Written private file: {}", path.display());
        Ok(())
    }

    /// Remove a file; a file that is already gone is not an error
    pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!("Removed file: {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove file: {}", path.display())),
        }
    }

    pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        match Self::read_optional(path).await? {
            Some(content) => {
                let value = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        let content =
            serde_json::to_string_pretty(value).context("Failed to serialize JSON content")?;
        Self::write_file_safe(path, &content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(FsOps::read_optional(&path).await.unwrap().is_none());
        assert!(FsOps::remove_file_if_exists(&path).await.is_ok());
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("value.json");

        FsOps::write_json(&path, &vec![1, 2, 3]).await.unwrap();
        let back: Option<Vec<u32>> = FsOps::read_json(&path).await.unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_private_write_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        FsOps::write_file_private(&path, "secret").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "secret");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_private_write_narrows_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "a much longer old value").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        FsOps::write_file_private(&path, "new").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
