//! Spreadsheet column abbreviation → translation key mappings.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};

use crate::catalog::TranslationCatalog;
use crate::config::ValidationError;

/// Default column mappings.
///
/// key: column header in the spreadsheet, value: translation key.
static BUILTIN_COLUMN_MAPPINGS: LazyLock<ColumnMappings> = LazyLock::new(|| {
    ColumnMappings::from_entries([
        ("ZT", "机动车：状态"),
        ("HPZL", "机动车：号牌种类"),
        ("YWLX", "机动车：业务类型"),
        ("YWYY", "机动车：业务原因"),
        ("YTSX", "机动车：用途属性"),
        ("CLLX", "机动车：车辆类型"),
        ("CLYT", "机动车：车辆用途"),
        ("CSYS", "机动车：车身颜色"),
        ("DYBJ", "机动车：抵押状态"),
        ("HDFS", "机动车：获得方式"),
        ("GLBM", "部门：公安、社会化部门"),
        ("YWBLBZ", "部门：公安、社会化部门"),
        ("YWBLBM", "部门：公安、社会化部门"),
    ])
});

/// The process-wide default column mapping table.
///
/// # Examples
/// ```
/// use pinyin_key_search::builtin_column_mappings;
///
/// assert_eq!(builtin_column_mappings().get("ZT"), Some("机动车：状态"));
/// assert_eq!(builtin_column_mappings().get("UNKNOWN"), None);
/// ```
#[must_use]
pub fn builtin_column_mappings() -> &'static ColumnMappings {
    &BUILTIN_COLUMN_MAPPINGS
}

/// Read-only table from column abbreviation to translation key.
///
/// Lookups are exact and case-sensitive. Unknown abbreviations are `None`;
/// deciding what to do with an unmapped column is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ColumnMappings {
    /// Abbreviation → translation key.
    entries: HashMap<String, String>,
}

impl ColumnMappings {
    /// Creates a table from `(abbreviation, key)` pairs. Later pairs win.
    pub fn from_entries<I, A, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, K)>,
        A: Into<String>,
        K: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(a, k)| (a.into(), k.into())).collect() }
    }

    /// Translation key for `abbreviation`.
    #[must_use]
    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.entries.get(abbreviation).map(String::as_str)
    }

    /// All `(abbreviation, key)` pairs sorted by abbreviation.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> =
            self.entries.iter().map(|(a, k)| (a.as_str(), k.as_str())).collect();
        pairs.sort_unstable();
        pairs
    }

    /// Abbreviations mapped to `key`, sorted.
    #[must_use]
    pub fn abbreviations_for(&self, key: &str) -> Vec<&str> {
        let mut abbreviations: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, k)| k.as_str() == key)
            .map(|(a, _)| a.as_str())
            .collect();
        abbreviations.sort_unstable();
        abbreviations
    }

    /// Returns a copy of this table with `overrides` added on top.
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides.entries.iter().map(|(a, k)| (a.clone(), k.clone())));
        Self { entries }
    }

    /// Number of mapped abbreviations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every mapped key exists in `catalog`.
    ///
    /// # Errors
    /// One [`ValidationError`] per abbreviation whose key is missing, in
    /// abbreviation order.
    pub fn validate_against(&self, catalog: &TranslationCatalog) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = self
            .entries()
            .into_iter()
            .filter(|(_, key)| !catalog.contains(key))
            .map(|(abbreviation, key)| {
                ValidationError::new(
                    format!("columnMappings.{abbreviation}"),
                    format!("Translation key '{key}' does not exist in the catalog"),
                )
            })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
