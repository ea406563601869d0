//! Connection settings for the Sheets values endpoint.

use crate::error::{Result, SheetsError};
use std::fmt;
use std::time::Duration;

/// Public Sheets API host.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Where to read from and how to authenticate.
#[derive(Clone)]
pub struct SheetsConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,

    /// Base URL of the API, without the `/v4` prefix.
    pub base_url: String,

    /// Spreadsheet document identifier.
    pub spreadsheet_id: String,

    /// A1-notation range, e.g. `dashboard!A1:E24`.
    pub range: String,

    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl SheetsConfig {
    /// Create a new configuration against the public API host.
    pub fn new(
        api_key: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            timeout: Some(default_timeout()),
        }
    }

    /// Create configuration with the API key taken from an environment variable.
    pub fn from_env(
        env_var: &str,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
    ) -> Result<Self> {
        let api_key = std::env::var(env_var)
            .map_err(|_| SheetsError::ApiKeyNotFound(format!("Environment variable: {}", env_var)))?;

        if api_key.trim().is_empty() {
            return Err(SheetsError::ApiKeyNotFound(format!(
                "Environment variable {} is empty",
                env_var
            )));
        }

        Ok(Self::new(api_key, spreadsheet_id, range))
    }

    /// Point the client at a different host (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// The key never reaches logs.
impl fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_public_host() {
        let config = SheetsConfig::new("key", "sheet", "dashboard!A1:E24");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = SheetsConfig::new("super-secret", "sheet", "A1:B2");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_missing() {
        let err = SheetsConfig::from_env("SHEETS_TEST_KEY_THAT_IS_NEVER_SET", "sheet", "A1:B2")
            .unwrap_err();
        assert!(err.is_auth_error());
    }
}
