//! Configuration management for clubboard
//!
//! Supports dual-location configuration:
//! - User-level: ~/.clubboard/clubboard.toml
//! - Project-level: ./.clubboard/clubboard.toml
//!
//! Project-level config overrides user-level config.

mod init;
mod loader;
mod schema;

pub use init::{init_project_config, write_default_config, DEFAULT_CONFIG};
pub use loader::{project_config_dir, user_config_dir, ConfigLoader, CONFIG_DIR, CONFIG_FILE};
pub use schema::{
    BoardConfig, ColumnsConfig, Layout, PollConfig, SheetConfig, StatusConfig, UiConfig, UiLabels,
};
