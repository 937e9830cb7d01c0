//! Error types for the fitzer_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitzer_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile fields outside their valid ranges
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Exercise catalog lookup or validation error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Login validation error
    #[error("{0}")]
    Account(String),

    /// Unrecognised value for an enumerated field
    #[error("Parse error: {0}")]
    Parse(String),
}
