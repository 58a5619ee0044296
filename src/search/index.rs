//! Initials index over a translation catalog.

use std::collections::HashMap;

use super::initials::first_letters;
use crate::catalog::TranslationCatalog;

/// Maps each translation key to its uppercase pinyin initials.
///
/// Keys without initials are absent rather than mapped to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialsIndex {
    /// Key → initials.
    entries: HashMap<String, String>,
}

impl InitialsIndex {
    /// Builds the index for every key in `catalog`.
    #[must_use]
    pub fn build(catalog: &TranslationCatalog) -> Self {
        let entries: HashMap<String, String> = catalog
            .iter()
            .filter_map(|key| first_letters(key).map(|letters| (key.to_string(), letters)))
            .collect();

        tracing::debug!(
            indexed = entries.len(),
            skipped = catalog.len() - entries.len(),
            "Built initials index"
        );

        Self { entries }
    }

    /// Initials for `key`, if it has any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if `key` has initials.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys with initials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key has initials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::{
        sample_catalog,
        vehicle_catalog,
    };

    #[rstest]
    fn build_indexes_every_romanizable_key(vehicle_catalog: TranslationCatalog) {
        let index = InitialsIndex::build(&vehicle_catalog);

        assert_that!(index.len(), eq(vehicle_catalog.len()));
        assert_that!(index.get("机动车：状态"), some(eq("JDCZT")));
        assert_that!(index.get("部门：公安、社会化部门"), some(eq("BMGASHHBM")));
    }

    #[rstest]
    fn build_omits_keys_without_initials() {
        let catalog = TranslationCatalog::new(["机动车：状态", "：、", "--"]).unwrap();

        let index = InitialsIndex::build(&catalog);

        assert_that!(index.len(), eq(1));
        assert_that!(index.contains_key("：、"), eq(false));
        assert_that!(index.get("--"), none());
    }

    #[rstest]
    fn build_is_deterministic(sample_catalog: TranslationCatalog) {
        let first = InitialsIndex::build(&sample_catalog);
        let second = InitialsIndex::build(&sample_catalog);

        assert_eq!(first, second);
    }

    #[rstest]
    fn get_unknown_key_is_none(sample_catalog: TranslationCatalog) {
        let index = InitialsIndex::build(&sample_catalog);

        assert_that!(index.get("存在しないキー"), none());
    }

    #[rstest]
    fn build_empty_catalog() {
        let index = InitialsIndex::build(&TranslationCatalog::default());

        assert_that!(index.is_empty(), eq(true));
    }
}
