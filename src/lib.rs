//! pinyin-key-search
//!
//! 中国語の翻訳キーを、文字列そのものまたは拼音の頭文字で検索するライブラリ。
//! 表計算ソフトの列名略称から翻訳キーへの対応表も提供する。

pub mod catalog;
pub mod columns;
pub mod config;
pub mod search;
mod test_utils;

pub use catalog::{
    CatalogError,
    TranslationCatalog,
};
pub use columns::{
    ColumnMappings,
    builtin_column_mappings,
};
pub use search::index::InitialsIndex;
pub use search::initials::first_letters;
pub use search::key_match::matches_key;
pub use search::searcher::{
    KeySearcher,
    search_keys,
};
