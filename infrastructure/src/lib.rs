//! Infrastructure layer for corpus-pool
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileCorpusConfig, FileDrawConfig, FileHistoryConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use storage::{JsonCorpusLoader, JsonHistoryStore};
