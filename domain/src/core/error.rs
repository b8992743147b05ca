//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("Selector '{path}' not found: no key '{selector}'")]
    InvalidSelector { selector: String, path: String },

    #[error("Invalid selection '{path}': must be of the type sequence, {found} given")]
    InvalidSelection { path: String, found: &'static str },

    #[error("Corpus pool is empty")]
    EmptyPool,

    #[error("Corpus '{0}' has no items")]
    EmptyCorpus(String),
}

impl DomainError {
    /// Check if this error reports a missing history domain
    pub fn is_unknown_domain(&self) -> bool {
        matches!(self, DomainError::UnknownDomain(_))
    }
}
