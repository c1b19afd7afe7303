//! Error types for engine configuration.
//!
//! Gameplay itself never fails: ineffective input is absorbed as a no-op.
//! Only building an engine from a bad configuration, or parsing an unknown
//! difficulty identifier, can produce an error.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while configuring an engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("symbol catalog has {available} symbols but {needed} pairs are required")]
    CatalogTooSmall { needed: usize, available: usize },

    #[error("duplicate symbol in catalog: {0}")]
    DuplicateSymbol(String),
}
