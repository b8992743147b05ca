//! Draw configuration from TOML (`[draw]` section)

use serde::{Deserialize, Serialize};

/// Raw draw configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDrawConfig {
    /// Number of items drawn per run
    pub count: usize,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for FileDrawConfig {
    fn default() -> Self {
        Self {
            count: 1,
            seed: None,
        }
    }
}
