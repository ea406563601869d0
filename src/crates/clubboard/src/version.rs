//! Build identity shown by `--version` and at startup

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Long `--version` text: version plus the data source it reads
pub const VERSION_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (Google Sheets values API v4, license ",
    env!("CARGO_PKG_LICENSE"),
    ")"
);
