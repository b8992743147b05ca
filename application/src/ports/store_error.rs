//! Errors shared by the storage ports

use corpus_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing corpus and history files
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not access '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("Could not decode '{source_id}': {message}")]
    Decode { source_id: String, message: String },

    #[error("Could not encode '{source_id}': {message}")]
    Encode { source_id: String, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
