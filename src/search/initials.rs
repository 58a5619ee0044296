//! Pinyin initials derivation.

use pinyin::ToPinyin;

/// Returns the uppercase pinyin initials of `text`, in character order.
///
/// Chinese characters contribute the first letter of their default reading.
/// Cased letters (Latin, Greek, Cyrillic, ...) stand for themselves,
/// uppercased. Punctuation, digits, whitespace and uncased scripts such as
/// kana are skipped.
///
/// Returns `None` when no character yields a letter.
///
/// # Examples
/// ```
/// use pinyin_key_search::search::initials::first_letters;
///
/// assert_eq!(first_letters("北京").as_deref(), Some("BJ"));
/// assert_eq!(first_letters("机动车：状态").as_deref(), Some("JDCZT"));
/// assert_eq!(first_letters("：、"), None);
/// ```
#[must_use]
pub fn first_letters(text: &str) -> Option<String> {
    let mut letters = String::new();
    for ch in text.chars() {
        push_initial(ch, &mut letters);
    }

    if letters.is_empty() {
        tracing::debug!(text = %text, "No pinyin initials derived");
        return None;
    }

    Some(letters)
}

/// Appends the initial of a single character to `letters`, if it has one.
fn push_initial(ch: char, letters: &mut String) {
    // 多音字はライブラリの既定の読みを採用する
    if let Some(pinyin) = ch.to_pinyin() {
        if let Some(initial) = pinyin.plain().chars().next().filter(char::is_ascii_alphabetic) {
            letters.push(initial.to_ascii_uppercase());
        }
        return;
    }

    if ch.is_alphabetic() && (ch.is_lowercase() || ch.is_uppercase()) {
        letters.extend(ch.to_uppercase());
    }
}
