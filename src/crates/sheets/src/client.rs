//! HTTP client for the `spreadsheets.values.get` endpoint.

use crate::config::SheetsConfig;
use crate::error::{Result, SheetsError};
use crate::record::Table;
use crate::values::ValueRange;
use reqwest::{Client, Url};
use tracing::debug;

/// Google Sheets values client.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    config: SheetsConfig,
    client: Client,
}

impl SheetsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SheetsConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Client configuration.
    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// Endpoint URL for the configured range, without the API key.
    ///
    /// The range is percent-encoded as a single path segment.
    pub fn values_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| SheetsError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                SheetsError::InvalidUrl(format!("{} cannot be a base URL", self.config.base_url))
            })?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                self.config.range.as_str(),
            ]);

        Ok(url)
    }

    /// Fetch the raw `ValueRange` document.
    pub async fn fetch_values(&self) -> Result<ValueRange> {
        let url = self.values_url()?;
        debug!("Fetching sheet values from {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let values: ValueRange = serde_json::from_str(&body)?;
        debug!(
            "Received {} row(s) for {}",
            values.values.as_ref().map_or(0, Vec::len),
            values.range
        );

        Ok(values)
    }

    /// Fetch the range and reshape it into a header-keyed table.
    pub async fn fetch_table(&self) -> Result<Table> {
        let values = self.fetch_values().await?;
        let range = if values.range.is_empty() {
            self.config.range.clone()
        } else {
            values.range.clone()
        };

        values.into_table().map_err(|err| match err {
            SheetsError::EmptyRange(_) => SheetsError::EmptyRange(range),
            other => other,
        })
    }
}
