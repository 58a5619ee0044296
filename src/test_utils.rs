//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のフィクスチャを提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use rstest::fixture;

use crate::catalog::TranslationCatalog;

/// 車両・部門の翻訳キー（列マッピングが参照するキー全て）
pub(crate) const VEHICLE_KEYS: [&str; 11] = [
    "机动车：状态",
    "机动车：号牌种类",
    "机动车：业务类型",
    "机动车：业务原因",
    "机动车：用途属性",
    "机动车：车辆类型",
    "机动车：车辆用途",
    "机动车：车身颜色",
    "机动车：抵押状态",
    "机动车：获得方式",
    "部门：公安、社会化部门",
];

/// 2 キーだけの最小カタログ
#[fixture]
pub(crate) fn sample_catalog() -> TranslationCatalog {
    TranslationCatalog::new(["机动车：状态", "部门：公安、社会化部门"]).unwrap()
}

/// 列マッピングの参照先を全て含むカタログ
#[fixture]
pub(crate) fn vehicle_catalog() -> TranslationCatalog {
    TranslationCatalog::new(VEHICLE_KEYS).unwrap()
}
