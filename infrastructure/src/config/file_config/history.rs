//! History configuration from TOML (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name used when no history path is configured
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Raw history configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Path to the JSON history file
    pub path: Option<String>,
}

impl FileHistoryConfig {
    /// Resolve the history file location
    ///
    /// Falls back to `$XDG_DATA_HOME/corpus-pool/history.json`, or
    /// `./history.json` when no data directory is known.
    pub fn resolve_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(path),
            None => Self::default_path(),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("corpus-pool").join(DEFAULT_HISTORY_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
    }
}
