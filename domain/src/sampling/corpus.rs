//! Corpus: a named collection of selectable items

use crate::core::error::DomainError;
use crate::core::item::Item;
use crate::sampling::history::History;
use rand::Rng;
use rand::seq::SliceRandom;

/// A named, fixed collection of candidate items
///
/// The name is also the [`History`] domain under which draws are recorded.
/// Items may repeat; they never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    name: String,
    items: Vec<Item>,
}

impl Corpus {
    /// Create a corpus from a name and its items
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Create a corpus from the sequence found at a nested path in `root`
    ///
    /// Each selector indexes one level of nesting: a key in a mapping or a
    /// decimal index in a sequence. No selectors selects `root` itself.
    ///
    /// # Example
    ///
    /// ```
    /// use corpus_domain::{Corpus, Item};
    /// use serde_json::json;
    ///
    /// let root = Item::from(json!({"data": {"fruits": ["apple", "pear"]}}));
    /// let corpus = Corpus::from_selection("condiments", &root, &["data", "fruits"]).unwrap();
    ///
    /// assert_eq!(corpus.name(), "condiments");
    /// assert_eq!(corpus.items(), &[Item::from("apple"), Item::from("pear")]);
    /// ```
    pub fn from_selection<S: AsRef<str>>(
        name: impl Into<String>,
        root: &Item,
        selectors: &[S],
    ) -> Result<Self, DomainError> {
        let path = selectors
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(".");

        let mut selection = root;
        for selector in selectors {
            let selector = selector.as_ref();
            selection = selection
                .get(selector)
                .ok_or_else(|| DomainError::InvalidSelector {
                    selector: selector.to_string(),
                    path: path.clone(),
                })?;
        }

        match selection.as_sequence() {
            Some(items) => Ok(Self::new(name, items.to_vec())),
            None => Err(DomainError::InvalidSelection {
                path,
                found: selection.type_name(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether every item already appears in this corpus's history domain
    ///
    /// A corpus without a history domain is never exhausted.
    pub fn is_exhausted(&self, history: &History) -> bool {
        history.has_domain(&self.name)
            && self
                .items
                .iter()
                .all(|item| history.has_domain_item(&self.name, item))
    }

    /// Draw a random item that has not been produced yet, and record it
    ///
    /// An exhausted corpus has its domain reset before drawing. If every
    /// candidate is somehow already recorded, the last one examined is
    /// returned anyway.
    pub fn random_item<R: Rng + ?Sized>(
        &self,
        history: &mut History,
        rng: &mut R,
    ) -> Result<Item, DomainError> {
        if self.items.is_empty() {
            return Err(DomainError::EmptyCorpus(self.name.clone()));
        }

        if self.is_exhausted(history) {
            history.remove_domain(&self.name)?;
        }

        let mut candidates: Vec<&Item> = self.items.iter().collect();
        candidates.shuffle(rng);

        let chosen = candidates
            .iter()
            .copied()
            .find(|item| !history.has_domain_item(&self.name, item))
            .or_else(|| candidates.last().copied())
            .cloned()
            .ok_or_else(|| DomainError::EmptyCorpus(self.name.clone()))?;

        history.add_domain_item(&self.name, chosen.clone());
        Ok(chosen)
    }
}
