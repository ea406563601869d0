//! Configuration commands

use crate::config::{init_project_config, BoardConfig, ConfigLoader};
use crate::{BoardError, Result};
use colored::Colorize;
use tracing::info;

/// Message printed when the config could not be loaded
pub fn fallback_notice(err: &BoardError) -> String {
    format!("Failed to load config, using built-in defaults: {}", err)
}

/// Show current configuration
pub fn handle_show_config(config: &BoardConfig) -> Result<()> {
    let config_toml = toml::to_string_pretty(config)?;

    println!("{}", "Current Configuration:".bold());
    println!("=====================");
    println!("{}", config_toml);

    let loader = ConfigLoader::new();
    println!("{}", "Config Locations:".bold());
    match loader.user_config_path() {
        Some(path) => println!("  User:    {}", path.display()),
        None => println!("  User:    {}", "(no home directory)".bright_black()),
    }
    println!("  Project: {}", loader.project_config_path().display());

    Ok(())
}

/// Handle init command
pub async fn handle_init(force: bool) -> Result<()> {
    info!("Initializing clubboard configuration...");
    let path = init_project_config(force).await?;
    println!("{} {}", "✓ Created config file:".green().bold(), path.display());
    Ok(())
}
