//! History store port
//!
//! Defines where the selection history lives between runs.

use super::store_error::StoreError;
use corpus_domain::History;

/// Port for loading and persisting [`History`]
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait HistoryStore: Send + Sync {
    /// Human-readable location, used in log messages
    fn location(&self) -> String;

    /// Whether a stored history exists yet
    fn exists(&self) -> bool;

    /// Load the stored history
    fn load(&self) -> Result<History, StoreError>;

    /// Load the stored history, or an empty one if nothing is stored yet
    fn load_or_default(&self) -> Result<History, StoreError> {
        if self.exists() {
            self.load()
        } else {
            Ok(History::new())
        }
    }

    /// Persist `history`, replacing whatever was stored
    fn save(&self, history: &History) -> Result<(), StoreError>;
}
