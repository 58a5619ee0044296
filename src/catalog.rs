//! Translation catalog: the ordered set of first-level translation keys.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a [`TranslationCatalog`].
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A key at the given position was the empty string.
    #[error("Translation key at index {index} is empty")]
    EmptyKey { index: usize },

    /// The JSON document root was not an object.
    #[error("Translation catalog must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Failed to parse translation catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, duplicate-free list of translation keys.
///
/// Order is the catalog order callers expect back from a search, so it is
/// preserved exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationCatalog {
    /// Keys in catalog order.
    keys: Vec<String>,
}

impl TranslationCatalog {
    /// Creates a catalog from keys in the order given.
    ///
    /// Duplicates keep their first position; later occurrences are dropped.
    pub fn new<I, S>(keys: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();

        for (index, key) in keys.into_iter().enumerate() {
            let key = key.into();
            if key.is_empty() {
                return Err(CatalogError::EmptyKey { index });
            }
            if !seen.insert(key.clone()) {
                tracing::warn!(key = %key, index, "Duplicate translation key ignored");
                continue;
            }
            ordered.push(key);
        }

        Ok(Self { keys: ordered })
    }

    /// Creates a catalog from the first-level keys of a JSON translation object.
    ///
    /// # Examples
    /// ```
    /// use pinyin_key_search::TranslationCatalog;
    ///
    /// let catalog = TranslationCatalog::from_json_str(
    ///     r#"{"机动车：状态": {"A": "正常"}, "部门：公安、社会化部门": {}}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(catalog.keys(), ["机动车：状态", "部门：公安、社会化部门"]);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// Creates a catalog from the first-level keys of a parsed JSON object.
    pub fn from_json(json: &Value) -> Result<Self, CatalogError> {
        let Value::Object(map) = json else {
            return Err(CatalogError::NotAnObject { found: json_kind(json) });
        };

        Self::new(map.keys().cloned())
    }

    /// Keys in catalog order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Iterates keys in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the catalog has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if `key` is in the catalog.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

/// Human readable name of a JSON value's type for error messages.
const fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
