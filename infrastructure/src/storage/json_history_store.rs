//! History store backed by a JSON file
//!
//! The file holds one compact JSON object mapping each domain to the array
//! of items already produced for it. A bare `[]` is read as an empty
//! history.

use super::file::{read_text, write_text};
use corpus_application::{HistoryStore, StoreError};
use corpus_domain::History;
use std::path::PathBuf;

/// Persists [`History`] as compact JSON at a fixed path
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStore for JsonHistoryStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<History, StoreError> {
        let text = read_text(&self.path)?;
        serde_json::from_str(&text).map_err(|e| StoreError::Decode {
            source_id: self.location(),
            message: e.to_string(),
        })
    }

    fn save(&self, history: &History) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(history).map_err(|e| StoreError::Encode {
            source_id: self.location(),
            message: e.to_string(),
        })?;
        write_text(&self.path, &encoded)
    }
}
