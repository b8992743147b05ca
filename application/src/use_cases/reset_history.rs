//! Reset history use case
//!
//! Removes domains from the stored history so their corpora start over.

use crate::ports::history_store::HistoryStore;
use crate::ports::store_error::StoreError;
use corpus_domain::DomainError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while resetting history
#[derive(Error, Debug)]
pub enum ResetHistoryError {
    #[error("History error: {0}")]
    History(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`ResetHistoryUseCase`]
#[derive(Debug, Clone, Default)]
pub struct ResetHistoryInput {
    /// Domains to remove; empty means every domain
    pub domains: Vec<String>,
}

impl ResetHistoryInput {
    /// Reset every domain
    pub fn all() -> Self {
        Self::default()
    }

    /// Reset only the named domains
    pub fn domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of a [`ResetHistoryUseCase`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetHistoryOutput {
    /// Domains that were removed, in removal order and without repeats
    pub removed: Vec<String>,
}

/// Use case for clearing stored history
pub struct ResetHistoryUseCase {
    store: Arc<dyn HistoryStore>,
}

impl ResetHistoryUseCase {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// Remove the requested domains and save the result
    ///
    /// Naming a domain that is not in the history is an error and leaves
    /// the stored history untouched.
    pub fn execute(
        &self,
        input: ResetHistoryInput,
    ) -> Result<ResetHistoryOutput, ResetHistoryError> {
        let mut history = self.store.load_or_default()?;

        let removed = if input.domains.is_empty() {
            let all: Vec<String> = history.domain_names().map(str::to_string).collect();
            history.clear();
            all
        } else {
            let mut removed: Vec<String> = Vec::with_capacity(input.domains.len());
            for domain in input.domains {
                if removed.contains(&domain) {
                    continue;
                }
                history.remove_domain(&domain)?;
                removed.push(domain);
            }
            removed
        };

        self.store.save(&history)?;
        info!(
            "Reset {} domain(s) in {}",
            removed.len(),
            self.store.location()
        );

        Ok(ResetHistoryOutput { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryHistoryStore;
    use corpus_domain::{History, Item};

    fn stored_history() -> History {
        let mut history = History::new();
        history.add_domain_item("fruits", Item::from("apple"));
        history.add_domain_item("vegetables", Item::from("carrot"));
        history
    }

    #[test]
    fn test_reset_named_domain() {
        let store = Arc::new(MemoryHistoryStore::with_history(stored_history()));
        let use_case = ResetHistoryUseCase::new(store.clone());

        let output = use_case
            .execute(ResetHistoryInput::domains(["fruits"]))
            .unwrap();

        assert_eq!(output.removed, vec!["fruits"]);
        let history = store.stored().unwrap();
        assert!(!history.has_domain("fruits"));
        assert!(history.has_domain("vegetables"));
    }

    #[test]
    fn test_reset_repeated_domain_once() {
        let store = Arc::new(MemoryHistoryStore::with_history(stored_history()));
        let use_case = ResetHistoryUseCase::new(store.clone());

        let output = use_case
            .execute(ResetHistoryInput::domains(["fruits", "fruits"]))
            .unwrap();

        assert_eq!(output.removed, vec!["fruits"]);
        assert_eq!(store.save_count(), 1);
        assert!(store.stored().unwrap().has_domain("vegetables"));
    }

    #[test]
    fn test_reset_all() {
        let store = Arc::new(MemoryHistoryStore::with_history(stored_history()));
        let use_case = ResetHistoryUseCase::new(store.clone());

        let output = use_case.execute(ResetHistoryInput::all()).unwrap();

        assert_eq!(output.removed, vec!["fruits", "vegetables"]);
        assert!(store.stored().unwrap().is_empty());
    }

    #[test]
    fn test_reset_unknown_domain_fails_without_saving() {
        let store = Arc::new(MemoryHistoryStore::with_history(stored_history()));
        let use_case = ResetHistoryUseCase::new(store.clone());

        let err = use_case
            .execute(ResetHistoryInput::domains(["fruits", "grains"]))
            .unwrap_err();

        assert!(matches!(
            err,
            ResetHistoryError::Domain(DomainError::UnknownDomain(ref d)) if d == "grains"
        ));
        assert_eq!(store.save_count(), 0);
        assert!(store.stored().unwrap().has_domain("fruits"));
    }
}
