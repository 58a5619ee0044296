//! Translation key search by raw text or pinyin initials.

pub mod index;
pub mod initials;
pub mod key_match;
pub mod searcher;
