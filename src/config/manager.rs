//! 設定管理を行うモジュール

use super::{
    ConfigError,
    SearchSettings,
};
use crate::catalog::TranslationCatalog;
use crate::columns::{
    ColumnMappings,
    builtin_column_mappings,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: SearchSettings,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SearchSettings::default() }
    }

    /// JSON 文字列から設定を読み込む
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_from_str(&mut self, json: &str) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from JSON");

        let settings: SearchSettings = serde_json::from_str(json)?;
        self.update_settings(settings)
    }

    /// 設定を更新する
    pub fn update_settings(&mut self, new_settings: SearchSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        // バリデーション
        new_settings.validate().map_err(|errors| {
            tracing::warn!(count = errors.len(), "Invalid search settings");
            ConfigError::ValidationErrors(errors)
        })?;

        // 設定を更新
        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &SearchSettings {
        &self.current_settings
    }

    /// 現在の設定から有効な列マッピングを組み立てる
    ///
    /// `require_mapped_keys_in_catalog` が有効な場合、カタログに存在しない
    /// キーへのマッピングはエラーになる。
    pub fn column_mappings(
        &self,
        catalog: &TranslationCatalog,
    ) -> Result<ColumnMappings, ConfigError> {
        let settings = &self.current_settings;

        let mappings = if settings.use_builtin_column_mappings {
            builtin_column_mappings().merged_with(&settings.column_mappings)
        } else {
            settings.column_mappings.clone()
        };

        if settings.require_mapped_keys_in_catalog {
            mappings.validate_against(catalog).map_err(|errors| {
                tracing::warn!(count = errors.len(), "Column mappings reference unknown keys");
                ConfigError::ValidationErrors(errors)
            })?;
        }

        tracing::debug!(entries = mappings.len(), "Column mappings ready");
        Ok(mappings)
    }
}
