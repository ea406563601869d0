//! Configuration loader with dual-location support

use crate::config::schema::BoardConfig;
use crate::{BoardError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Directory holding clubboard configuration
pub const CONFIG_DIR: &str = ".clubboard";

/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "clubboard.toml";

/// Configuration loader that handles both user and project configs
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    user_config_path: Option<PathBuf>,
    project_config_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for `~/.clubboard/clubboard.toml` and `./.clubboard/clubboard.toml`
    pub fn new() -> Self {
        Self {
            user_config_path: user_config_dir().map(|dir| dir.join(CONFIG_FILE)),
            project_config_path: project_config_dir().join(CONFIG_FILE),
        }
    }

    /// Create a loader for explicit file locations
    pub fn with_paths(user_config_path: Option<PathBuf>, project_config_path: PathBuf) -> Self {
        Self {
            user_config_path,
            project_config_path,
        }
    }

    /// Load configuration from both locations with project taking precedence
    ///
    /// Missing files are skipped. Settings merge key by key, so a project file
    /// that only sets `[poll]` keeps the user's `[sheet]`.
    pub async fn load(&self) -> Result<BoardConfig> {
        let mut merged = toml::Value::Table(toml::Table::new());

        if let Some(path) = &self.user_config_path {
            if let Some(user) = read_table(path).await? {
                merge_values(&mut merged, user);
            }
        }

        if let Some(project) = read_table(&self.project_config_path).await? {
            merge_values(&mut merged, project);
        }

        let config: BoardConfig = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    ///
    /// The error is returned alongside so the caller can tell the user.
    pub async fn load_or_default(&self) -> (BoardConfig, Option<BoardError>) {
        match self.load().await {
            Ok(config) => (config, None),
            Err(err) => (BoardConfig::default(), Some(err)),
        }
    }

    /// Get user config path
    pub fn user_config_path(&self) -> Option<&Path> {
        self.user_config_path.as_deref()
    }

    /// Get project config path
    pub fn project_config_path(&self) -> &Path {
        &self.project_config_path
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `~/.clubboard`, if a home directory is known
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}

/// `./.clubboard`, relative to the current directory
pub fn project_config_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_DIR)
}

async fn read_table(path: &Path) -> Result<Option<toml::Value>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        debug!("No config file at {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).await?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| {
        BoardError::Config(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    debug!("Loaded config file {}", path.display());
    Ok(Some(toml::Value::Table(table)))
}

/// Overlay `other` onto `base`, descending into tables
fn merge_values(base: &mut toml::Value, other: toml::Value) {
    match (base, other) {
        (toml::Value::Table(base), toml::Value::Table(other)) => {
            for (key, value) in other {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, other) => *base = other,
    }
}
