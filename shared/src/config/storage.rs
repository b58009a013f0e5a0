//! Token storage configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the durable verification snapshot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding all outstanding verification records
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl StorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("verifications.json")
}
