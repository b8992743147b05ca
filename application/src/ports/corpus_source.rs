//! Corpus source port
//!
//! Defines how corpora are obtained from outside the process.

use super::store_error::StoreError;
use corpus_domain::Corpus;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Separates the file path from the selector path in a corpus argument
const SELECTOR_SEPARATOR: char = '#';

/// Where to find a corpus: a file plus the selectors leading to its items
///
/// The textual form is `path` or `path#selector.selector`.
///
/// # Example
///
/// ```
/// use corpus_application::CorpusSpec;
///
/// let spec: CorpusSpec = "data/condiments.json#data.fruits".parse().unwrap();
/// assert_eq!(spec.path.to_str(), Some("data/condiments.json"));
/// assert_eq!(spec.selectors, vec!["data", "fruits"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSpec {
    pub path: PathBuf,
    pub selectors: Vec<String>,
}

impl CorpusSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            selectors: Vec::new(),
        }
    }

    /// Add selectors leading to the item sequence
    pub fn with_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors = selectors.into_iter().map(Into::into).collect();
        self
    }
}

/// Error parsing a textual corpus argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCorpusSpecError {
    #[error("Corpus path cannot be empty")]
    EmptyPath,

    #[error("Empty selector in '{0}'")]
    EmptySelector(String),
}

impl FromStr for CorpusSpec {
    type Err = ParseCorpusSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, selectors) = match s.split_once(SELECTOR_SEPARATOR) {
            Some((path, selectors)) => (path, Some(selectors)),
            None => (s, None),
        };

        if path.trim().is_empty() {
            return Err(ParseCorpusSpecError::EmptyPath);
        }

        let selectors = match selectors {
            Some(selectors) => {
                let parts: Vec<String> = selectors.split('.').map(str::to_string).collect();
                if parts.iter().any(String::is_empty) {
                    return Err(ParseCorpusSpecError::EmptySelector(s.to_string()));
                }
                parts
            }
            None => Vec::new(),
        };

        Ok(Self::new(path).with_selectors(selectors))
    }
}

impl fmt::Display for CorpusSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        if !self.selectors.is_empty() {
            write!(f, "{}{}", SELECTOR_SEPARATOR, self.selectors.join("."))?;
        }
        Ok(())
    }
}

/// Port for loading corpora
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait CorpusSource: Send + Sync {
    /// Load the corpus described by `spec`
    fn load_corpus(&self, spec: &CorpusSpec) -> Result<Corpus, StoreError>;
}
