//! Searcher over a fixed translation catalog.

use std::sync::OnceLock;

use super::index::InitialsIndex;
use super::key_match::matches_key;
use crate::catalog::TranslationCatalog;

/// Searches a fixed catalog by raw text or pinyin initials.
///
/// The initials index is computed once, either on the first search or
/// eagerly through [`KeySearcher::warm_up`], and is read-only afterwards.
#[derive(Debug, Default)]
pub struct KeySearcher {
    /// Keys to search, in result order.
    catalog: TranslationCatalog,
    /// Lazily built initials for `catalog`.
    index: OnceLock<InitialsIndex>,
}

impl KeySearcher {
    /// Creates a searcher; the index is not built until needed.
    #[must_use]
    pub const fn new(catalog: TranslationCatalog) -> Self {
        Self { catalog, index: OnceLock::new() }
    }

    /// Builds the initials index now instead of on the first search.
    pub fn warm_up(&self) {
        let index = self.index();
        tracing::debug!(keys = self.catalog.len(), indexed = index.len(), "Searcher warmed up");
    }

    /// The catalog being searched.
    #[must_use]
    pub const fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    /// The initials index, built on first access.
    #[must_use]
    pub fn index(&self) -> &InitialsIndex {
        self.index.get_or_init(|| InitialsIndex::build(&self.catalog))
    }

    /// Returns the catalog keys matching `query`, in catalog order.
    ///
    /// `None` or an empty query returns every key.
    ///
    /// # Examples
    /// ```
    /// use pinyin_key_search::{KeySearcher, TranslationCatalog};
    ///
    /// let catalog = TranslationCatalog::new(["机动车：状态", "部门：公安、社会化部门"]).unwrap();
    /// let searcher = KeySearcher::new(catalog);
    ///
    /// assert_eq!(searcher.search(Some("zt")), ["机动车：状态"]);
    /// assert_eq!(searcher.search(Some("部门")), ["部门：公安、社会化部门"]);
    /// assert_eq!(searcher.search(None).len(), 2);
    /// ```
    #[must_use]
    pub fn search(&self, query: Option<&str>) -> Vec<&str> {
        browse_or_filter(&self.catalog, query, |query| {
            filter_keys(&self.catalog, self.index(), query)
        })
    }
}

/// One-shot search that builds a fresh index for `catalog`.
///
/// Prefer [`KeySearcher`] when searching the same catalog repeatedly.
#[must_use]
pub fn search_keys<'a>(catalog: &'a TranslationCatalog, query: Option<&str>) -> Vec<&'a str> {
    browse_or_filter(catalog, query, |query| {
        filter_keys(catalog, &InitialsIndex::build(catalog), query)
    })
}

/// Returns every key for an absent or empty query, otherwise runs `filter`.
///
/// `filter` only runs for a non-empty query, so no index is built for a
/// browse-all request.
fn browse_or_filter<'a>(
    catalog: &'a TranslationCatalog,
    query: Option<&str>,
    filter: impl FnOnce(&str) -> Vec<&'a str>,
) -> Vec<&'a str> {
    match query {
        Some(query) if !query.is_empty() => filter(query),
        _ => catalog.iter().collect(),
    }
}

/// Stable filter of `catalog` against a non-empty `query` using `index`.
fn filter_keys<'a>(
    catalog: &'a TranslationCatalog,
    index: &InitialsIndex,
    query: &str,
) -> Vec<&'a str> {
    catalog.iter().filter(|key| matches_key(key, index.get(key), query)).collect()
}
