//! Command-line interface for clubboard
//!
//! `watch` (the default) runs the live dashboard, `show` prints one snapshot,
//! `config` prints the effective configuration and `init` writes a starter
//! config file.

pub mod config;
pub mod show;

use crate::config::{BoardConfig, Layout};
use crate::Result;
use clap::{Parser, Subcommand};
use sheets::{SheetsClient, ValuesSource};
use std::sync::Arc;

/// clubboard - club registration dashboard
#[derive(Parser, Debug)]
#[command(name = "clubboard")]
#[command(version = crate::version::VERSION)]
#[command(long_version = crate::version::VERSION_INFO)]
#[command(about = "Live club registration dashboard backed by a Google Sheet", long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Google API key (overrides the configured environment variable)
    #[arg(long, global = true, env = "CLUBBOARD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the live dashboard (default)
    Watch {
        /// Initial layout (overrides config)
        #[arg(short, long, value_enum)]
        layout: Option<Layout>,

        /// Poll interval in milliseconds (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,
    },

    /// Fetch once and print the clubs
    Show {
        /// Output format (table, json, plain)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Shorthand for `--format json`
        #[arg(long, conflicts_with = "format")]
        json: bool,
    },

    /// Show current configuration
    Config,

    /// Write a default config file for this project
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Sheets client for the configured sheet
pub fn connect(config: &BoardConfig, api_key: Option<&str>) -> Result<Arc<dyn ValuesSource>> {
    let key = config.resolve_api_key(api_key)?;
    let client = SheetsClient::new(config.sheets_config(key))?;
    Ok(Arc::new(client))
}
