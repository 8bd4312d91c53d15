// src/core/preferences.rs
//! Persisted listing preferences: the active filters and the current page

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::fs_ops::FsOps;
use crate::filters::FilterState;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub filters: FilterState,
    pub page: u32,
}

impl Preferences {
    /// Replace the filters; a change of filters sends the user back to the first page
    pub fn apply_filters(&mut self, filters: FilterState) {
        if self.filters != filters {
            self.page = 0;
        }
        self.filters = filters;
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PREFERENCES_FILE),
        }
    }

    /// Load stored preferences; a missing or unreadable file yields the defaults
    pub async fn load(&self) -> Preferences {
        match FsOps::read_json::<Preferences>(&self.path).await {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(e) => {
                warn!("Ignoring stored preferences: {:#}", e);
                Preferences::default()
            }
        }
    }

    pub async fn save(&self, prefs: &Preferences) -> Result<()> {
        FsOps::write_json(&self.path, prefs).await
    }
}
