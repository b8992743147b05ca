//! Corpus configuration from TOML (`[[corpora]]` array)

use corpus_application::CorpusSpec;
use serde::{Deserialize, Serialize};

/// One configured corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// Path to the JSON corpus file
    pub path: String,
    /// Keys leading from the document root to the item array
    pub selectors: Vec<String>,
}

impl FileCorpusConfig {
    pub fn to_spec(&self) -> CorpusSpec {
        CorpusSpec::new(&self.path).with_selectors(self.selectors.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_spec() {
        let config = FileCorpusConfig {
            path: "food.json".to_string(),
            selectors: vec!["data".to_string(), "fruits".to_string()],
        };
        assert_eq!(config.to_spec().to_string(), "food.json#data.fruits");
    }
}
