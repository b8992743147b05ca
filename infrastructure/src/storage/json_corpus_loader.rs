//! Corpus loader for JSON-encoded files
//!
//! A corpus file may hold any JSON document. Selectors from the
//! [`CorpusSpec`] walk nested objects down to the array of items, and the
//! corpus is named after the file with its `.json` suffix removed.

use super::file::{basename, read_text};
use corpus_application::{CorpusSource, CorpusSpec, StoreError};
use corpus_domain::{Corpus, Item};
use tracing::{debug, warn};

/// Loads corpora from JSON files on the local file system
#[derive(Debug, Clone, Default)]
pub struct JsonCorpusLoader;

impl JsonCorpusLoader {
    pub fn new() -> Self {
        Self
    }
}

impl CorpusSource for JsonCorpusLoader {
    fn load_corpus(&self, spec: &CorpusSpec) -> Result<Corpus, StoreError> {
        let text = read_text(&spec.path)?;
        let root: Item = serde_json::from_str(&text).map_err(|e| StoreError::Decode {
            source_id: spec.path.display().to_string(),
            message: e.to_string(),
        })?;

        let name = basename(&spec.path, ".json");
        let corpus = Corpus::from_selection(name, &root, spec.selectors.as_slice())?;

        if corpus.is_empty() {
            warn!("Corpus '{}' from {} has no items", corpus.name(), spec);
        } else {
            debug!("Read {} items for corpus '{}'", corpus.len(), corpus.name());
        }

        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_domain::DomainError;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_with_selectors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "condiments.json",
            r#"{
                "description": "A list of condiments",
                "data": {
                    "fruits": ["apple", "banana", "pear"],
                    "grains": ["barley", "millet", "oatmeal"]
                }
            }"#,
        );

        let spec = CorpusSpec::new(&path).with_selectors(["data", "fruits"]);
        let corpus = JsonCorpusLoader::new().load_corpus(&spec).unwrap();

        assert_eq!(corpus.name(), "condiments");
        assert_eq!(
            corpus.items(),
            &[Item::from("apple"), Item::from("banana"), Item::from("pear")]
        );
    }

    #[test]
    fn test_load_top_level_array_keeps_item_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "mixed.json", r#"["a", 1, true, {"k": "v"}]"#);

        let corpus = JsonCorpusLoader::new()
            .load_corpus(&CorpusSpec::new(&path))
            .unwrap();

        assert_eq!(corpus.name(), "mixed");
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.items()[1], Item::from(1i64));
        assert_eq!(corpus.items()[3].type_name(), "mapping");
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "broken.json", "this is not valid JSON");

        let err = JsonCorpusLoader::new()
            .load_corpus(&CorpusSpec::new(&path))
            .unwrap_err();

        match err {
            StoreError::Decode { source_id, .. } => assert!(source_id.ends_with("broken.json")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_selector() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "condiments.json",
            r#"{"description": "A list of condiments", "toppings": ["aioli", "ajvar", "amba"]}"#,
        );

        let spec = CorpusSpec::new(&path).with_selectors(["condiments", "garnishes"]);
        let err = JsonCorpusLoader::new().load_corpus(&spec).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Domain(DomainError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_selection_of_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "condiments.json",
            r#"{"description": "A list of condiments", "data": {"fruits": ["apple"]}}"#,
        );

        let spec = CorpusSpec::new(&path).with_selectors(["description"]);
        let err = JsonCorpusLoader::new().load_corpus(&spec).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Domain(DomainError::InvalidSelection { found: "string", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CorpusSpec::new(dir.path().join("nope.json"));

        let err = JsonCorpusLoader::new().load_corpus(&spec).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
