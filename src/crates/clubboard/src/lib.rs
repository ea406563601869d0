//! clubboard library
//!
//! Polls a Google Sheet of club registrations and presents each club's
//! capacity status, either as a live terminal dashboard or as a one-shot
//! listing.

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod refresher;
pub mod status;
pub mod tui;
pub mod version;

pub use board::{club_rows, thai_date, ClubRow};
pub use config::{BoardConfig, ConfigLoader, Layout};
pub use error::{BoardError, Result};
pub use refresher::{BoardSnapshot, PollFailure, Refresher, RefresherHandle};
pub use status::{classify, Status, StatusClassifier, StatusLabels, Tone, DEFAULT_LOW_THRESHOLD};
pub use tui::App;
