//! Error types for loading definitions and configuration.

use thiserror::Error;

/// Errors that can occur while loading or saving settings documents.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A definition parsed but is missing required data.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),
}

/// Convenience alias for results with [`SettingsError`].
pub type Result<T> = std::result::Result<T, SettingsError>;
