//! Error types for the Sheets client.

use thiserror::Error;

/// Result type for Sheets operations.
pub type Result<T> = std::result::Result<T, SheetsError>;

/// Errors that can occur while fetching or reshaping a sheet range.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The request could not complete (connect, TLS, timeout, body read).
    /// The request URL is stripped since its query carries the API key.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Sheets API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a `ValueRange` document.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The range held no rows, so there is no header to key records by.
    #[error("Range {0} returned no rows")]
    EmptyRange(String),

    /// API key not found in environment.
    #[error("API key not found: {0}")]
    ApiKeyNotFound(String),

    /// The endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SheetsError {
    /// Check if a later attempt can succeed without any configuration change.
    pub fn is_transient(&self) -> bool {
        match self {
            SheetsError::Http(_) => true,
            SheetsError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if this error is due to the API key.
    pub fn is_auth_error(&self) -> bool {
        match self {
            SheetsError::ApiKeyNotFound(_) => true,
            SheetsError::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SheetsError {
    fn from(err: reqwest::Error) -> Self {
        SheetsError::Http(err.without_url())
    }
}

impl From<serde_json::Error> for SheetsError {
    fn from(err: serde_json::Error) -> Self {
        SheetsError::InvalidResponse(err.to_string())
    }
}
