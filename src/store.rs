//! Basic persistence layer.
//!
//! Saves the last fully-joined data set as JSON so the list renders cached
//! content at startup, before the first refresh completes. Load failures
//! are non-fatal: a missing or corrupt file just means an empty start.

use std::fs;
use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Result};

use crate::models::CompleteData;

const APP_DIR: &str = "postboard";
const FILE_NAME: &str = "complete.json";

/// File-backed store for the last-known-good data set.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store under the platform data directory, `None` when no data
    /// directory can be determined.
    pub fn new() -> Option<Self> {
        let dir = dirs::data_dir()?.join(APP_DIR);
        Some(Self {
            path: dir.join(FILE_NAME),
        })
    }

    /// Store at an explicit path (used by tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the last saved data set, `None` if absent or unreadable.
    pub fn get(&self) -> Option<CompleteData> {
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt store file");
                None
            }
        }
    }

    /// Persist a data set, replacing any previous one.
    pub fn set(&self, data: &CompleteData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create store directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(data).wrap_err("Failed to serialize data set")?;
        fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write data set to {:?}", self.path))?;
        Ok(())
    }
}
