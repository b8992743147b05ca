//! Item value object
//!
//! Items are the values a corpus hands out. They come from decoded JSON
//! documents, so an item can be any JSON value, including nested
//! sequences and mappings.
//!
//! Equality is structural: two mappings are equal when they hold the same
//! keys with equal values, regardless of key order. [`Item::canonical_key`]
//! gives the same guarantee as a string, which is what set operations use.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A single selectable value
///
/// # Example
///
/// ```
/// use corpus_domain::Item;
///
/// let item = Item::from("aioli");
/// assert_eq!(item.as_str(), Some("aioli"));
/// assert_eq!(item.to_string(), "aioli");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Item {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Item>),
    /// Key/value pairs in document order
    Mapping(Vec<(String, Item)>),
}

impl Item {
    /// Human-readable name of the item's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Null => "null",
            Item::Bool(_) => "boolean",
            Item::Number(_) => "number",
            Item::String(_) => "string",
            Item::Sequence(_) => "sequence",
            Item::Mapping(_) => "mapping",
        }
    }

    /// Returns the string content if this is a string item
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Item::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence item
    pub fn as_sequence(&self) -> Option<&[Item]> {
        match self {
            Item::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key in a mapping item, or a decimal index in a sequence
    ///
    /// Returns `None` for missing keys, for indexes that are out of range or
    /// not written as a plain decimal number, and for scalar items.
    pub fn get(&self, key: &str) -> Option<&Item> {
        match self {
            Item::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            Item::Sequence(items) => parse_index(key).and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Canonical compact JSON encoding with mapping keys sorted
    ///
    /// Two items are equal if and only if their canonical keys are equal.
    pub fn canonical_key(&self) -> String {
        self.to_canonical_value().to_string()
    }

    fn to_canonical_value(&self) -> Value {
        match self {
            Item::Mapping(entries) => {
                let mut sorted: Vec<&(String, Item)> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                Value::Object(
                    sorted
                        .into_iter()
                        .map(|(k, v)| (k.clone(), v.to_canonical_value()))
                        .collect(),
                )
            }
            Item::Sequence(items) => {
                Value::Array(items.iter().map(Item::to_canonical_value).collect())
            }
            // serde_json treats the two zeros as equal numbers
            Item::Number(n) if n.is_f64() && n.as_f64() == Some(0.0) => Value::from(0.0),
            other => Value::from(other.clone()),
        }
    }
}

/// Parse `"0"`, `"1"`, ... as a sequence index; signs and leading zeros are
/// not indexes.
fn parse_index(key: &str) -> Option<usize> {
    let digits_only = !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    key.parse().ok()
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Null, Item::Null) => true,
            (Item::Bool(a), Item::Bool(b)) => a == b,
            (Item::Number(a), Item::Number(b)) => a == b,
            (Item::String(a), Item::String(b)) => a == b,
            (Item::Sequence(a), Item::Sequence(b)) => a == b,
            // Keys are unique within a mapping, so equal length plus
            // one-way containment is enough.
            (Item::Mapping(a), Item::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.iter().any(|(k, v)| k == key && v == value))
            }
            _ => false,
        }
    }
}

impl Eq for Item {}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Item::Null,
            Value::Bool(b) => Item::Bool(b),
            Value::Number(n) => Item::Number(n),
            Value::String(s) => Item::String(s),
            Value::Array(values) => Item::Sequence(values.into_iter().map(Item::from).collect()),
            Value::Object(map) => {
                Item::Mapping(map.into_iter().map(|(k, v)| (k, Item::from(v))).collect())
            }
        }
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        match item {
            Item::Null => Value::Null,
            Item::Bool(b) => Value::Bool(b),
            Item::Number(n) => Value::Number(n),
            Item::String(s) => Value::String(s),
            Item::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Item::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::String(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::String(s)
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Bool(b)
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Number(n.into())
    }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Item::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Strings print as their raw text; everything else as compact JSON.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", Value::from(other.clone())),
        }
    }
}
