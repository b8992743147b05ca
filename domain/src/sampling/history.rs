//! Selection history
//!
//! [`History`] records, per domain, which items have already been produced.
//! It is loaded and persisted by the caller and handed to [`Corpus`] and
//! [`Pool`] as `&mut History`.
//!
//! [`Corpus`]: super::corpus::Corpus
//! [`Pool`]: super::pool::Pool

use crate::core::error::DomainError;
use crate::core::item::Item;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-domain record of produced items
///
/// Encodes as a JSON object mapping domain name to an array of items.
/// Domains keep the order in which they were first recorded, and within
/// one domain no value appears twice. An empty JSON array also decodes as
/// an empty history.
///
/// # Example
///
/// ```
/// use corpus_domain::{History, Item};
///
/// let mut history = History::new();
/// history.add_domain_item("condiments", Item::from("aioli"));
/// history.add_domain_item("condiments", Item::from("aioli"));
///
/// assert!(history.has_domain_item("condiments", &Item::from("aioli")));
/// assert_eq!(history.all_domain_items("condiments").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory", into = "Map<String, Value>")]
pub struct History {
    domains: Vec<(String, Vec<Item>)>,
}

/// Accepted encodings of a stored history
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHistory {
    Domains(Map<String, Value>),
    Empty(Vec<Value>),
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the domain has been recorded at all
    pub fn has_domain(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All items recorded for a domain, in insertion order
    pub fn all_domain_items(&self, name: &str) -> Result<&[Item], DomainError> {
        self.position(name)
            .map(|index| self.domains[index].1.as_slice())
            .ok_or_else(|| DomainError::UnknownDomain(name.to_string()))
    }

    /// Whether the domain contains a value equal to `item`
    ///
    /// An unknown domain contains nothing.
    pub fn has_domain_item(&self, name: &str, item: &Item) -> bool {
        match self.all_domain_items(name) {
            Ok(items) => items.contains(item),
            Err(_) => false,
        }
    }

    /// Record an item, creating the domain if needed
    ///
    /// Adding a value that is already present is a no-op.
    pub fn add_domain_item(&mut self, name: &str, item: Item) {
        let items = self.domain_entry(name);
        if !items.contains(&item) {
            items.push(item);
        }
    }

    /// Forget a domain entirely
    pub fn remove_domain(&mut self, name: &str) -> Result<(), DomainError> {
        let index = self
            .position(name)
            .ok_or_else(|| DomainError::UnknownDomain(name.to_string()))?;
        self.domains.remove(index);
        Ok(())
    }

    /// Forget every domain
    pub fn clear(&mut self) {
        self.domains.clear();
    }

    /// Names of all recorded domains, in the order they were first recorded
    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|(name, _)| name.as_str())
    }

    /// Number of recorded domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.domains.iter().position(|(domain, _)| domain == name)
    }

    fn domain_entry(&mut self, name: &str) -> &mut Vec<Item> {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.domains.push((name.to_string(), Vec::new()));
                self.domains.len() - 1
            }
        };
        &mut self.domains[index].1
    }
}

/// Builds a history from decoded data, collapsing repeated values.
impl TryFrom<StoredHistory> for History {
    type Error = String;

    fn try_from(stored: StoredHistory) -> Result<Self, Self::Error> {
        let data = match stored {
            StoredHistory::Domains(data) => data,
            StoredHistory::Empty(values) if values.is_empty() => Map::new(),
            StoredHistory::Empty(_) => {
                return Err("expected an object mapping domains to arrays".to_string());
            }
        };

        let mut history = History::new();
        for (name, items) in data {
            let Value::Array(items) = items else {
                return Err(format!("domain '{}' is not an array", name));
            };
            history.domain_entry(&name);
            for item in items {
                history.add_domain_item(&name, Item::from(item));
            }
        }
        Ok(history)
    }
}

impl From<History> for Map<String, Value> {
    fn from(history: History) -> Self {
        history
            .domains
            .into_iter()
            .map(|(name, items)| {
                let items = items.into_iter().map(Value::from).collect();
                (name, Value::Array(items))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_domain_is_absent() {
        let history = History::new();
        assert!(!history.has_domain("condiments"));
        assert!(!history.has_domain_item("condiments", &Item::from("aioli")));
        assert!(!history.has_domain_item("condiments", &Item::Null));
    }

    #[test]
    fn test_all_domain_items_unknown_domain() {
        let history = History::new();
        let err = history.all_domain_items("condiments").unwrap_err();
        assert_eq!(err, DomainError::UnknownDomain("condiments".to_string()));
    }

    #[test]
    fn test_add_domain_item_is_idempotent() {
        let mut history = History::new();
        history.add_domain_item("condiments", Item::from("aioli"));
        history.add_domain_item("condiments", Item::from("ajvar"));
        history.add_domain_item("condiments", Item::from("aioli"));

        assert_eq!(
            history.all_domain_items("condiments").unwrap(),
            &[Item::from("aioli"), Item::from("ajvar")]
        );
    }

    #[test]
    fn test_add_domain_item_compares_by_value() {
        let mut history = History::new();
        history.add_domain_item("recipes", Item::from(json!({"a": 1, "b": [2]})));
        history.add_domain_item("recipes", Item::from(json!({"b": [2], "a": 1})));

        assert_eq!(history.all_domain_items("recipes").unwrap().len(), 1);
        assert!(history.has_domain_item("recipes", &Item::from(json!({"b": [2], "a": 1}))));
    }

    #[test]
    fn test_remove_domain() {
        let mut history = History::new();
        history.add_domain_item("condiments", Item::from("aioli"));

        assert!(history.remove_domain("condiments").is_ok());
        assert!(!history.has_domain("condiments"));
    }

    #[test]
    fn test_remove_unknown_domain_fails() {
        let mut history = History::new();
        let err = history.remove_domain("condiments").unwrap_err();
        assert!(err.is_unknown_domain());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.add_domain_item("fruits", Item::from("apple"));
        history.add_domain_item("vegetables", Item::from("carrot"));
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut history = History::new();
        history.add_domain_item("fruits", Item::from("banana"));
        history.add_domain_item("fruits", Item::from("apple"));
        history.add_domain_item("numbers", Item::from(42i64));
        history.add_domain_item("nested", Item::from(json!({"k": [true, null, 1.5]})));

        let encoded = serde_json::to_string(&history).unwrap();
        let decoded: History = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, history);
        assert_eq!(
            decoded.all_domain_items("fruits").unwrap(),
            &[Item::from("banana"), Item::from("apple")]
        );
    }

    #[test]
    fn test_encoding_is_compact_object() {
        let mut history = History::new();
        history.add_domain_item("fruits", Item::from("apple"));

        let encoded = serde_json::to_string(&history).unwrap();
        assert_eq!(encoded, r#"{"fruits":["apple"]}"#);
    }

    #[test]
    fn test_decode_keeps_empty_domain_and_collapses_duplicates() {
        let history: History =
            serde_json::from_str(r#"{"empty":[],"fruits":["apple","apple"]}"#).unwrap();

        assert!(history.has_domain("empty"));
        assert!(history.all_domain_items("empty").unwrap().is_empty());
        assert_eq!(history.all_domain_items("fruits").unwrap().len(), 1);
        assert_eq!(history.domain_names().collect::<Vec<_>>(), vec!["empty", "fruits"]);
    }

    #[test]
    fn test_decode_preserves_domain_order() {
        let encoded = r#"{"zebra":["x"],"apple":["y"]}"#;
        let history: History = serde_json::from_str(encoded).unwrap();

        assert_eq!(history.domain_names().collect::<Vec<_>>(), vec!["zebra", "apple"]);
        assert_eq!(serde_json::to_string(&history).unwrap(), encoded);
    }

    #[test]
    fn test_new_domains_are_appended() {
        let mut history: History = serde_json::from_str(r#"{"zebra":["x"]}"#).unwrap();
        history.add_domain_item("apple", Item::from("y"));
        history.add_domain_item("zebra", Item::from("z"));

        assert_eq!(
            serde_json::to_string(&history).unwrap(),
            r#"{"zebra":["x","z"],"apple":["y"]}"#
        );
    }

    #[test]
    fn test_remove_domain_keeps_order_of_the_rest() {
        let mut history: History =
            serde_json::from_str(r#"{"c":[1],"a":[2],"b":[3]}"#).unwrap();
        history.remove_domain("a").unwrap();

        assert_eq!(history.domain_names().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_decode_empty_array_as_empty_history() {
        let history: History = serde_json::from_str("[]").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array_domain() {
        assert!(serde_json::from_str::<History>(r#"{"fruits":"apple"}"#).is_err());
        assert!(serde_json::from_str::<History>(r#"["apple"]"#).is_err());
    }
}
