//! Application layer for corpus-pool
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    corpus_source::{CorpusSource, CorpusSpec, ParseCorpusSpecError},
    history_store::HistoryStore,
    store_error::StoreError,
};
pub use use_cases::draw_items::{
    DrawItemsError, DrawItemsInput, DrawItemsOutput, DrawItemsUseCase,
};
pub use use_cases::reset_history::{
    ResetHistoryError, ResetHistoryInput, ResetHistoryOutput, ResetHistoryUseCase,
};
