//! Registration status derived from capacity and sign-ups
//!
//! `remaining = total - registered` decides the status:
//!
//! | remaining              | status |
//! |------------------------|--------|
//! | `<= 0`                 | Full   |
//! | `1..=low_threshold`    | Low    |
//! | `> low_threshold`      | Open   |

use serde::{Deserialize, Serialize};

/// Remaining-seat count at or below which a club is reported as nearly full
pub const DEFAULT_LOW_THRESHOLD: i64 = 5;

/// Registration status of a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No seats left
    Full,
    /// A few seats left
    Low,
    /// Accepting registrations
    Open,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Low => write!(f, "low"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// Presentation hint for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Amber,
    Green,
}

impl Status {
    /// Presentation hint for this status
    pub fn tone(self) -> Tone {
        match self {
            Self::Full => Tone::Red,
            Self::Low => Tone::Amber,
            Self::Open => Tone::Green,
        }
    }
}

/// Classify a club by its capacity and sign-ups
pub fn classify(total: i64, registered: i64, low_threshold: i64) -> Status {
    let remaining = total.saturating_sub(registered);
    if remaining <= 0 {
        Status::Full
    } else if remaining <= low_threshold {
        Status::Low
    } else {
        Status::Open
    }
}

/// Display labels for each status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub full: String,
    pub low: String,
    pub open: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            full: "เต็มแล้ว".to_string(),
            low: "เหลือน้อย".to_string(),
            open: "รับสมัคร".to_string(),
        }
    }
}

impl StatusLabels {
    /// Label for `status`
    pub fn label(&self, status: Status) -> &str {
        match status {
            Status::Full => &self.full,
            Status::Low => &self.low,
            Status::Open => &self.open,
        }
    }
}

/// Classified status with everything a view needs to show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    pub status: Status,
    pub remaining: i64,
    pub label: &'a str,
    pub tone: Tone,
}

/// Classifier bound to a threshold and a set of labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClassifier {
    low_threshold: i64,
    labels: StatusLabels,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_THRESHOLD, StatusLabels::default())
    }
}

impl StatusClassifier {
    pub fn new(low_threshold: i64, labels: StatusLabels) -> Self {
        Self {
            low_threshold,
            labels,
        }
    }

    pub fn classify(&self, total: i64, registered: i64) -> Status {
        classify(total, registered, self.low_threshold)
    }

    /// Status, remaining seats, label and tone in one go
    pub fn info(&self, total: i64, registered: i64) -> StatusInfo<'_> {
        let status = self.classify(total, registered);
        StatusInfo {
            status,
            remaining: total.saturating_sub(registered),
            label: self.labels.label(status),
            tone: status.tone(),
        }
    }
}
