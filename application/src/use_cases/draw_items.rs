//! Draw items use case
//!
//! Loads the requested corpora and the stored history, draws items from a
//! [`Pool`] built over them, and persists the updated history.
//!
//! # Overview
//!
//! 1. **Load corpora** - every [`CorpusSpec`] goes through the [`CorpusSource`]
//! 2. **Load history** - from the [`HistoryStore`], or empty on first run
//! 3. **Draw** - `count` draws from the pool, each recorded in the history
//! 4. **Persist** - save the history unless the run is a dry run

use crate::ports::corpus_source::{CorpusSource, CorpusSpec};
use crate::ports::history_store::HistoryStore;
use crate::ports::store_error::StoreError;
use corpus_domain::{DomainError, Draw, Pool};
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while drawing items
#[derive(Error, Debug)]
pub enum DrawItemsError {
    #[error("Failed to load corpus '{spec}': {source}")]
    CorpusLoad {
        spec: String,
        #[source]
        source: StoreError,
    },

    #[error("History error: {0}")]
    History(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`DrawItemsUseCase`]
#[derive(Debug, Clone)]
pub struct DrawItemsInput {
    /// Corpora making up the pool
    pub corpora: Vec<CorpusSpec>,
    /// Number of items to draw
    pub count: usize,
    /// Whether to save the updated history
    pub persist: bool,
}

impl DrawItemsInput {
    pub fn new(corpora: Vec<CorpusSpec>) -> Self {
        Self {
            corpora,
            count: 1,
            persist: true,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Draw without saving the history afterwards
    pub fn dry_run(mut self) -> Self {
        self.persist = false;
        self
    }
}

/// Result of a [`DrawItemsUseCase`] run
#[derive(Debug, Clone)]
pub struct DrawItemsOutput {
    /// Draws in the order they were made
    pub draws: Vec<Draw>,
    /// Whether the history was written back
    pub persisted: bool,
}

/// Use case for drawing items from a pool of corpora
pub struct DrawItemsUseCase {
    source: Arc<dyn CorpusSource>,
    store: Arc<dyn HistoryStore>,
}

impl DrawItemsUseCase {
    pub fn new(source: Arc<dyn CorpusSource>, store: Arc<dyn HistoryStore>) -> Self {
        Self { source, store }
    }

    /// Build the pool, draw `input.count` items and persist the history
    pub fn execute<R: Rng + ?Sized>(
        &self,
        input: DrawItemsInput,
        rng: &mut R,
    ) -> Result<DrawItemsOutput, DrawItemsError> {
        let pool = self.load_pool(&input.corpora)?;

        if !self.store.exists() {
            info!("No history at {}, starting fresh", self.store.location());
        }
        let mut history = self.store.load_or_default()?;
        debug!(
            "History from {} has {} domains",
            self.store.location(),
            history.len()
        );

        let mut draws = Vec::with_capacity(input.count);
        for _ in 0..input.count {
            let draw = pool.random_draw(&mut history, rng)?;
            debug!("Drew {} from '{}'", draw.item, draw.corpus);
            draws.push(draw);
        }

        if input.persist {
            self.store.save(&history)?;
            info!("Saved history to {}", self.store.location());
        } else {
            debug!("Dry run, history not saved");
        }

        Ok(DrawItemsOutput {
            draws,
            persisted: input.persist,
        })
    }

    fn load_pool(&self, specs: &[CorpusSpec]) -> Result<Pool, DrawItemsError> {
        let mut pool = Pool::new();
        for spec in specs {
            let corpus =
                self.source
                    .load_corpus(spec)
                    .map_err(|source| DrawItemsError::CorpusLoad {
                        spec: spec.to_string(),
                        source,
                    })?;
            debug!(
                "Loaded corpus '{}' with {} items from {}",
                corpus.name(),
                corpus.len(),
                spec
            );
            pool.add_corpus(corpus);
        }
        Ok(pool)
    }
}
