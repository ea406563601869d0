//! Tracing subscriber setup

use crate::{BoardError, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// Appended to a file, without ANSI colors
    File(PathBuf),
    /// Dropped, for when the terminal belongs to the dashboard
    Discard,
}

/// Map a configured level name to a tracing level, defaulting to INFO
pub fn parse_level(name: &str) -> Level {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global fmt subscriber
pub fn init(level: Level, sink: LogSink) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(level);

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init()
        }
        LogSink::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| BoardError::Logging(e.to_string()))
}
