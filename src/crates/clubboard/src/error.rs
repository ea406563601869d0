//! Error types for the clubboard application

use sheets::SheetsError;
use thiserror::Error;

/// Errors that can occur in the clubboard application
#[derive(Debug, Error)]
pub enum BoardError {
    /// Fetching or reshaping the sheet failed
    #[error("Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Result type for clubboard operations
pub type Result<T> = std::result::Result<T, BoardError>;
