//! Configuration scaffolding

use crate::config::loader::{project_config_dir, CONFIG_FILE};
use crate::{BoardError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Commented default configuration written by `clubboard init`
pub const DEFAULT_CONFIG: &str = r#"# clubboard configuration
#
# Project-level config (./.clubboard/clubboard.toml) overrides
# user-level config (~/.clubboard/clubboard.toml) key by key.

[sheet]
spreadsheet_id = "1Hi_60oT8YPQkVLR68-Oi6Q3Uf4IavhlRKtb9VUqFQBA"
range = "dashboard!A1:E24"
api_key_env = "GOOGLE_API_KEY"    # variable holding the API key
base_url = "https://sheets.googleapis.com"
request_timeout_secs = 10         # 0 disables the timeout

[poll]
interval_ms = 3000

[status]
low_threshold = 5                 # remaining seats shown as nearly full

[status.labels]
full = "เต็มแล้ว"
low = "เหลือน้อย"
open = "รับสมัคร"

[columns]
name = "Club_name"
total = "จำนวนที่รับ"
registered = "Club_regis"
remaining = "Club_remain"

[ui]
layout = "table"                  # table, cards, split
log_level = "info"                # trace, debug, info, warn, error
# log_file = "clubboard.log"      # dashboard logs go nowhere unless set
colored_output = true
"#;

/// Write the default config into `dir`, refusing to overwrite unless `force`
pub async fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;

    let path = dir.join(CONFIG_FILE);
    if !force && fs::try_exists(&path).await.unwrap_or(false) {
        return Err(BoardError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    fs::write(&path, DEFAULT_CONFIG).await?;
    tracing::info!("Wrote config file: {}", path.display());
    Ok(path)
}

/// Initialize config for the current project
pub async fn init_project_config(force: bool) -> Result<PathBuf> {
    write_default_config(&project_config_dir(), force).await
}
