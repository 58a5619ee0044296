//! Translation key matching utilities.

/// Checks if `key` matches `query` by raw text or by pinyin initials.
///
/// - Raw text: `key` contains `query`, case-insensitively.
/// - Initials: `initials` (already uppercase) contains `query` uppercased.
///
/// An empty `query` matches every key.
#[must_use]
pub fn matches_key(key: &str, initials: Option<&str>, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    matches_text(key, query) || initials.is_some_and(|letters| matches_initials(letters, query))
}

/// Case-insensitive substring test over the raw key text.
fn matches_text(key: &str, query: &str) -> bool {
    key.to_lowercase().contains(&query.to_lowercase())
}

/// Substring test of the uppercased query against uppercase initials.
fn matches_initials(initials: &str, query: &str) -> bool {
    initials.contains(&query.to_uppercase())
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::chinese_substring("机动车：状态", Some("JDCZT"), "状态")]
    #[case::chinese_prefix("机动车：状态", Some("JDCZT"), "机动")]
    #[case::punctuation_literal("机动车：状态", Some("JDCZT"), "：")]
    #[case::initials_upper("机动车：状态", Some("JDCZT"), "ZT")]
    #[case::initials_lower("机动车：状态", Some("JDCZT"), "zt")]
    #[case::initials_mixed("机动车：状态", Some("JDCZT"), "dCz")]
    #[case::initials_whole("机动车：状态", Some("JDCZT"), "jdczt")]
    #[case::ascii_text_case_insensitive("VIN码", Some("VINM"), "vin")]
    #[case::raw_text_without_initials("：、", None, "、")]
    fn matches_key_positive_cases(
        #[case] key: &str,
        #[case] initials: Option<&str>,
        #[case] query: &str,
    ) {
        assert_that!(matches_key(key, initials, query), eq(true));
    }

    #[rstest]
    #[case::unrelated_chinese("机动车：状态", Some("JDCZT"), "部门")]
    #[case::initials_not_contiguous("机动车：状态", Some("JDCZT"), "JZ")]
    #[case::longer_than_initials("机动车：状态", Some("JDCZT"), "JDCZTX")]
    #[case::no_initials_entry("机动车：状态", None, "ZT")]
    #[case::punctuation_only_query("机动车：状态", Some("JDCZT"), "、")]
    #[case::full_pinyin_is_not_initials("机动车：状态", Some("JDCZT"), "zhuangtai")]
    fn matches_key_negative_cases(
        #[case] key: &str,
        #[case] initials: Option<&str>,
        #[case] query: &str,
    ) {
        assert_that!(matches_key(key, initials, query), eq(false));
    }

    #[rstest]
    fn matches_key_empty_query_matches_everything() {
        assert_that!(matches_key("机动车：状态", Some("JDCZT"), ""), eq(true));
        assert_that!(matches_key("：、", None, ""), eq(true));
    }
}
