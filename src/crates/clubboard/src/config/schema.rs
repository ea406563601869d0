//! Configuration schema for clubboard

use crate::error::{BoardError, Result};
use crate::status::{StatusClassifier, StatusLabels, DEFAULT_LOW_THRESHOLD};
use serde::{Deserialize, Serialize};
use sheets::{SheetsConfig, DEFAULT_BASE_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Main clubboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BoardConfig {
    /// Data source
    #[serde(default)]
    pub sheet: SheetConfig,

    /// Polling
    #[serde(default)]
    pub poll: PollConfig,

    /// Status classification
    #[serde(default)]
    pub status: StatusConfig,

    /// Which sheet columns hold which fields
    #[serde(default)]
    pub columns: ColumnsConfig,

    /// Presentation
    #[serde(default)]
    pub ui: UiConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    /// Spreadsheet document identifier
    pub spreadsheet_id: String,

    /// A1-notation range, header row first
    pub range: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// API host
    pub base_url: String,

    /// Per-request timeout in seconds (0 disables it)
    pub request_timeout_secs: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: "1Hi_60oT8YPQkVLR68-Oi6Q3Uf4IavhlRKtb9VUqFQBA".to_string(),
            range: "dashboard!A1:E24".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Polling configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    /// Interval between polls in milliseconds
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

/// Status classification configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatusConfig {
    /// Remaining seats at or below which a club shows as nearly full
    pub low_threshold: i64,

    /// Status labels
    pub labels: StatusLabels,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            labels: StatusLabels::default(),
        }
    }
}

/// Sheet header names for each displayed field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnsConfig {
    pub name: String,
    pub total: String,
    pub registered: String,
    pub remaining: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            name: "Club_name".to_string(),
            total: "จำนวนที่รับ".to_string(),
            registered: "Club_regis".to_string(),
            remaining: "Club_remain".to_string(),
        }
    }
}

/// Record layout in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One table with a row per club
    #[default]
    Table,
    /// A grid of cards
    Cards,
    /// Two tables side by side
    Split,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Table => write!(f, "table"),
            Layout::Cards => write!(f, "cards"),
            Layout::Split => write!(f, "split"),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Initial layout
    pub layout: Layout,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log file used while the dashboard owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Enable colored output for `show`
    pub colored_output: bool,

    /// Text shown by the dashboard
    pub labels: UiLabels,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            log_level: "info".to_string(),
            log_file: None,
            colored_output: true,
            labels: UiLabels::default(),
        }
    }
}

/// Dashboard text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiLabels {
    pub title: String,
    pub loading: String,
    pub error_message: String,
    pub retry: String,
    pub last_updated: String,
    pub empty: String,
    /// Prefix of the record count in the footer
    pub count: String,
    pub name: String,
    pub total: String,
    pub registered: String,
    pub remaining: String,
    pub status: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            title: "ข้อมูลชุมนุมปีการศึกษา 2568".to_string(),
            loading: "กำลังโหลดข้อมูล...".to_string(),
            error_message: "ไม่สามารถโหลดข้อมูลได้ กรุณาลองใหม่อีกครั้ง".to_string(),
            retry: "ลองใหม่".to_string(),
            last_updated: "ข้อมูลอัพเดทล่าสุด".to_string(),
            empty: "ไม่มีข้อมูลชุมนุม".to_string(),
            count: "จำนวนชุมนุม".to_string(),
            name: "ชื่อชุมนุม".to_string(),
            total: "จำนวนที่รับ".to_string(),
            registered: "สมัครแล้ว".to_string(),
            remaining: "เหลือ".to_string(),
            status: "สถานะ".to_string(),
        }
    }
}

impl BoardConfig {
    /// Check values that would make the dashboard misbehave
    pub fn validate(&self) -> Result<()> {
        if self.sheet.spreadsheet_id.trim().is_empty() {
            return Err(BoardError::Config("sheet.spreadsheet_id is empty".to_string()));
        }
        if self.sheet.range.trim().is_empty() {
            return Err(BoardError::Config("sheet.range is empty".to_string()));
        }
        if self.poll.interval_ms == 0 {
            return Err(BoardError::Config(
                "poll.interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.status.low_threshold < 0 {
            return Err(BoardError::Config(
                "status.low_threshold must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Poll interval
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll.interval_ms)
    }

    /// Classifier for the configured threshold and labels
    pub fn classifier(&self) -> StatusClassifier {
        StatusClassifier::new(self.status.low_threshold, self.status.labels.clone())
    }

    /// Resolve the API key: explicit value first, then the configured variable
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(key) = explicit.filter(|key| !key.trim().is_empty()) {
            return Ok(key.to_string());
        }

        match std::env::var(&self.sheet.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(BoardError::Config(format!(
                "No API key: set {} or pass --api-key",
                self.sheet.api_key_env
            ))),
        }
    }

    /// Client settings for the configured sheet
    pub fn sheets_config(&self, api_key: impl Into<String>) -> SheetsConfig {
        let timeout = match self.sheet.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        SheetsConfig::new(api_key, &self.sheet.spreadsheet_id, &self.sheet.range)
            .with_base_url(&self.sheet.base_url)
            .with_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.sheet.range, "dashboard!A1:E24");
        assert_eq!(config.poll.interval_ms, 3000);
        assert_eq!(config.status.low_threshold, 5);
        assert_eq!(config.columns.total, "จำนวนที่รับ");
        assert_eq!(config.ui.layout, Layout::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: BoardConfig = toml::from_str(
            r#"
            [status]
            low_threshold = 2

            [status.labels]
            open = "เปิดรับสมัคร"
            "#,
        )
        .unwrap();

        assert_eq!(config.status.low_threshold, 2);
        assert_eq!(config.status.labels.open, "เปิดรับสมัคร");
        assert_eq!(config.status.labels.full, "เต็มแล้ว");
        assert_eq!(config.poll.interval_ms, 3000);
    }

    #[test]
    fn test_layout_parses_lowercase() {
        let config: BoardConfig = toml::from_str("[ui]\nlayout = \"split\"").unwrap();
        assert_eq!(config.ui.layout, Layout::Split);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = BoardConfig::default();
        config.poll.interval_ms = 0;
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let mut config = BoardConfig::default();
        config.status.low_threshold = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let mut config = BoardConfig::default();
        config.sheet.api_key_env = "CLUBBOARD_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        assert_eq!(config.resolve_api_key(Some("abc")).unwrap(), "abc");
        assert!(config.resolve_api_key(None).is_err());
        assert!(config.resolve_api_key(Some("  ")).is_err());
    }

    #[test]
    fn test_sheets_config_timeout() {
        let mut config = BoardConfig::default();
        let sheets = config.sheets_config("key");
        assert_eq!(sheets.timeout, Some(Duration::from_secs(10)));
        assert_eq!(sheets.range, "dashboard!A1:E24");

        config.sheet.request_timeout_secs = 0;
        assert_eq!(config.sheets_config("key").timeout, None);
    }
}
