use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::columns::ColumnMappings;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "columnMappings.ZT")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSettings {
    /// Start from the builtin column mapping table.
    /// If false, only `column_mappings` are used.
    pub use_builtin_column_mappings: bool,

    /// Extra column mappings; an abbreviation already in the builtin table
    /// is overridden.
    pub column_mappings: ColumnMappings,

    /// Reject column mappings whose translation key is not in the catalog.
    pub require_mapped_keys_in_catalog: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            use_builtin_column_mappings: true,
            column_mappings: ColumnMappings::default(),
            require_mapped_keys_in_catalog: true,
        }
    }
}

impl SearchSettings {
    /// # Errors
    /// - Empty or blank column abbreviation
    /// - Empty or blank translation key
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (abbreviation, key) in self.column_mappings.entries() {
            if abbreviation.trim().is_empty() {
                errors.push(ValidationError::new(
                    "columnMappings",
                    "The column abbreviation cannot be empty. Example: {\"ZT\": \"机动车：状态\"}",
                ));
            }

            if key.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("columnMappings.{abbreviation}"),
                    "The translation key cannot be empty. Please specify a key from the catalog",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
