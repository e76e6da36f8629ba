//! Local storage locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory for persisted store entries.
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".forge/data"), |dir| dir.join("forge"))
}

/// Default directory for exported JSON files.
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` entry per feature store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory exports are written to when none is given.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export_dir: default_export_dir(),
        }
    }
}
