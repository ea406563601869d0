//! Abstraction over anything that yields a header-keyed table.

use crate::client::SheetsClient;
use crate::error::Result;
use crate::record::Table;
use async_trait::async_trait;

/// A read-only source of tabular values.
#[async_trait]
pub trait ValuesSource: Send + Sync {
    /// Fetch the current table.
    async fn fetch_table(&self) -> Result<Table>;

    /// Short human-readable description for logs and status lines.
    fn describe(&self) -> String;
}

#[async_trait]
impl ValuesSource for SheetsClient {
    async fn fetch_table(&self) -> Result<Table> {
        SheetsClient::fetch_table(self).await
    }

    fn describe(&self) -> String {
        format!(
            "sheet {} range {}",
            self.config().spreadsheet_id,
            self.config().range
        )
    }
}
