//! In-memory port implementations shared by use case tests

use crate::ports::corpus_source::{CorpusSource, CorpusSpec};
use crate::ports::history_store::HistoryStore;
use crate::ports::store_error::StoreError;
use corpus_domain::{Corpus, History, Item};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Corpus source backed by a map of path -> items
#[derive(Default)]
pub struct MemoryCorpusSource {
    corpora: HashMap<PathBuf, Vec<Item>>,
}

impl MemoryCorpusSource {
    pub fn with(mut self, path: &str, items: &[&str]) -> Self {
        self.corpora.insert(
            PathBuf::from(path),
            items.iter().map(|s| Item::from(*s)).collect(),
        );
        self
    }
}

impl CorpusSource for MemoryCorpusSource {
    fn load_corpus(&self, spec: &CorpusSpec) -> Result<Corpus, StoreError> {
        let items = self
            .corpora
            .get(&spec.path)
            .ok_or_else(|| StoreError::NotFound(spec.path.clone()))?;
        let name = spec
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Corpus::new(name, items.clone()))
    }
}

/// History store that keeps its state in memory and counts saves
#[derive(Default)]
pub struct MemoryHistoryStore {
    pub stored: Mutex<Option<History>>,
    pub saves: Mutex<usize>,
}

impl MemoryHistoryStore {
    pub fn with_history(history: History) -> Self {
        Self {
            stored: Mutex::new(Some(history)),
            saves: Mutex::new(0),
        }
    }

    pub fn stored(&self) -> Option<History> {
        self.stored.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn exists(&self) -> bool {
        self.stored.lock().unwrap().is_some()
    }

    fn load(&self) -> Result<History, StoreError> {
        self.stored
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreError::NotFound(PathBuf::from("memory")))
    }

    fn save(&self, history: &History) -> Result<(), StoreError> {
        *self.stored.lock().unwrap() = Some(history.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
