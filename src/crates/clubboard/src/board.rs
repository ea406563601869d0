//! Club rows as shown by every view

use crate::config::ColumnsConfig;
use crate::status::{Status, StatusClassifier, Tone};
use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;
use sheets::{Record, Table};

/// Offset between the Gregorian and the Thai Buddhist calendar year
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// One club, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubRow {
    pub name: String,
    /// Capacity as written in the sheet
    pub total_text: String,
    /// Sign-ups as written in the sheet
    pub registered_text: String,
    /// The sheet's remaining column, or the computed value when the sheet has none
    pub remaining_text: String,
    pub total: i64,
    pub registered: i64,
    pub status: Status,
    pub label: String,
    #[serde(skip)]
    pub tone: Tone,
}

impl ClubRow {
    pub fn from_record(record: &Record, columns: &ColumnsConfig, classifier: &StatusClassifier) -> Self {
        let total = record.number(&columns.total);
        let registered = record.number(&columns.registered);
        let info = classifier.info(total, registered);

        let remaining_text = if record.contains(&columns.remaining) {
            text(record, &columns.remaining)
        } else {
            info.remaining.max(0).to_string()
        };

        Self {
            name: text(record, &columns.name),
            total_text: text(record, &columns.total),
            registered_text: text(record, &columns.registered),
            remaining_text,
            total,
            registered,
            status: info.status,
            label: info.label.to_string(),
            tone: info.tone,
        }
    }
}

/// Absent cells render as blanks
fn text(record: &Record, header: &str) -> String {
    record.get(header).unwrap_or_default().to_string()
}

/// Rows for every record, in sheet order
pub fn club_rows(table: &Table, columns: &ColumnsConfig, classifier: &StatusClassifier) -> Vec<ClubRow> {
    table
        .records()
        .iter()
        .map(|record| ClubRow::from_record(record, columns, classifier))
        .collect()
}

/// Format a date the way Thai locales do: day/month/Buddhist-era year
pub fn thai_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{}/{}/{}",
        at.day(),
        at.month(),
        at.year() + BUDDHIST_ERA_OFFSET
    )
}
