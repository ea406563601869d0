//! Wire type of the `spreadsheets.values.get` response.

use crate::error::{Result, SheetsError};
use crate::record::Table;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `ValueRange` document.
///
/// The API leaves `values` out entirely when the range holds no data, and
/// trims trailing empty cells from each row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// Range the values cover, in A1 notation.
    #[serde(default)]
    pub range: String,

    /// `ROWS` unless the request asked otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,

    /// Cell values, row-major.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Vec<Value>>>,
}

impl ValueRange {
    /// Cell values as text.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.values
            .as_ref()
            .map(|rows| {
                rows.iter()
                    .map(|row| row.iter().map(cell_text).collect())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reshape into a header-keyed table.
    pub fn into_table(self) -> Result<Table> {
        if let Some(dimension) = self.major_dimension.as_deref() {
            if dimension != "ROWS" {
                return Err(SheetsError::InvalidResponse(format!(
                    "Expected ROWS major dimension, got {}",
                    dimension
                )));
            }
        }

        Table::from_rows(self.rows()).ok_or(SheetsError::EmptyRange(self.range))
    }
}

/// Formatted values arrive as strings; anything else is rendered as JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
