//! Pool: draws from several corpora at once

use crate::core::error::DomainError;
use crate::core::item::Item;
use crate::sampling::corpus::Corpus;
use crate::sampling::history::History;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A full reset leaves no eligible corpus exhausted, so the second pass
/// always finds one.
const MAX_PASSES: usize = 2;

/// An item together with the corpus that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    pub corpus: String,
    pub item: Item,
}

/// A collection of corpora sharing one [`History`]
///
/// Corpora with the same name share a history domain and therefore their
/// exhaustion state.
///
/// # Example
///
/// ```
/// use corpus_domain::{Corpus, History, Item, Pool};
///
/// let mut pool = Pool::new();
/// pool.add_corpus(Corpus::new("foo", vec![Item::from("bar")]));
///
/// let mut history = History::new();
/// let item = pool.random_item(&mut history, &mut rand::rng()).unwrap();
/// assert_eq!(item, Item::from("bar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pool {
    corpora: Vec<Corpus>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a corpus; names are not required to be unique
    pub fn add_corpus(&mut self, corpus: Corpus) {
        self.corpora.push(corpus);
    }

    pub fn corpora(&self) -> &[Corpus] {
        &self.corpora
    }

    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }

    /// Draw an item from a random non-exhausted corpus
    pub fn random_item<R: Rng + ?Sized>(
        &self,
        history: &mut History,
        rng: &mut R,
    ) -> Result<Item, DomainError> {
        self.random_draw(history, rng).map(|draw| draw.item)
    }

    /// Like [`Pool::random_item`], also reporting which corpus was used
    ///
    /// Corpora without items are never drawn from. When every remaining
    /// corpus is exhausted, all of their domains are removed from `history`
    /// and the draw is retried once.
    pub fn random_draw<R: Rng + ?Sized>(
        &self,
        history: &mut History,
        rng: &mut R,
    ) -> Result<Draw, DomainError> {
        let mut eligible: Vec<&Corpus> = self.corpora.iter().filter(|c| !c.is_empty()).collect();
        if eligible.is_empty() {
            return Err(DomainError::EmptyPool);
        }

        for _ in 0..MAX_PASSES {
            eligible.shuffle(rng);

            if let Some(corpus) = eligible.iter().find(|c| !c.is_exhausted(history)) {
                let item = corpus.random_item(history, rng)?;
                return Ok(Draw {
                    corpus: corpus.name().to_string(),
                    item,
                });
            }

            Self::reset_domains(&eligible, history)?;
        }

        Err(DomainError::EmptyPool)
    }

    fn reset_domains(corpora: &[&Corpus], history: &mut History) -> Result<(), DomainError> {
        for corpus in corpora {
            // Same-named corpora share a domain that is only removed once.
            if history.has_domain(corpus.name()) {
                history.remove_domain(corpus.name())?;
            }
        }
        Ok(())
    }
}
