//! Error types for Vitrin
//!
//! Provides standardized error handling across the library.

use thiserror::Error;

/// Errors that can occur in Vitrin
#[derive(Debug, Error)]
pub enum StoreError {
    /// Semantically invalid catalog data
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON decoding errors
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vitrin operations
pub type StoreResult<T> = Result<T, StoreError>;
