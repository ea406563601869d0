//! Read-only Google Sheets values client.
//!
//! This crate fetches a 2-D cell range through the Sheets v4 `values` endpoint
//! and reshapes it into records keyed by the header row.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use sheets::{SheetsClient, SheetsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SheetsConfig::from_env(
//!         "GOOGLE_API_KEY",
//!         "1Hi_60oT8YPQkVLR68-Oi6Q3Uf4IavhlRKtb9VUqFQBA",
//!         "dashboard!A1:E24",
//!     )?;
//!     let client = SheetsClient::new(config)?;
//!
//!     let table = client.fetch_table().await?;
//!     for record in table.records() {
//!         println!("{:?}", record.get("Club_name"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod record;
pub mod source;
pub mod values;

pub use client::SheetsClient;
pub use config::{SheetsConfig, DEFAULT_BASE_URL};
pub use error::{Result, SheetsError};
pub use record::{parse_leading_int, OrderedRecords, Record, Table};
pub use source::ValuesSource;
pub use values::ValueRange;
