//! JSON file adapters for the storage ports
//!
//! - [`JsonCorpusLoader`] implements [`CorpusSource`](corpus_application::CorpusSource)
//! - [`JsonHistoryStore`] implements [`HistoryStore`](corpus_application::HistoryStore)

mod file;
mod json_corpus_loader;
mod json_history_store;

pub use file::basename;
pub use json_corpus_loader::JsonCorpusLoader;
pub use json_history_store::JsonHistoryStore;
