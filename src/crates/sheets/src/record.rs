//! Header-keyed records built from a 2-D cell range.
//!
//! The first row of a range is the header. Every following row becomes a
//! [`Record`] by pairing cells with headers by position:
//!
//! - a row shorter than the header leaves the trailing fields *absent*
//!   (`None`), which is distinct from an empty cell (`Some("")`);
//! - cells past the last header are dropped;
//! - when a header repeats, the right-most column wins.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// One data row, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Option<String>>,
}

impl Record {
    /// Build a record by pairing `header` with `row` positionally.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        if row.len() > header.len() {
            debug!(
                "Dropping {} cell(s) beyond the {} header column(s)",
                row.len() - header.len(),
                header.len()
            );
        }

        let fields = header
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), row.get(index).cloned()))
            .collect();

        Self { fields }
    }

    /// Cell text for `header`, or `None` when the column is unknown or the
    /// cell is absent.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).and_then(|cell| cell.as_deref())
    }

    /// Whether the record has a field for `header`, absent or not.
    pub fn contains(&self, header: &str) -> bool {
        self.fields.contains_key(header)
    }

    /// Whether `header` is a known column whose cell was missing from the row.
    pub fn is_absent(&self, header: &str) -> bool {
        matches!(self.fields.get(header), Some(None))
    }

    /// Lenient integer value of a field; see [`parse_leading_int`].
    pub fn number(&self, header: &str) -> i64 {
        self.get(header).map(parse_leading_int).unwrap_or(0)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, cell)| (key.into(), cell.map(Into::into)))
                .collect(),
        }
    }
}

/// The header row and every data row of one fetched range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Reshape rows into a table. Returns `None` when there is no header row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let mut rows = rows.into_iter();
        let headers = rows.next()?;

        let mut seen = HashMap::with_capacity(headers.len());
        for key in &headers {
            let count = seen.entry(key.as_str()).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                warn!("Header {:?} appears more than once; the last column wins", key);
            }
        }

        let records = rows.map(|row| Record::from_row(&headers, &row)).collect();

        Some(Self { headers, records })
    }

    /// Column headers in sheet order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in sheet order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as serializable maps whose keys follow header order.
    pub fn ordered_records(&self) -> OrderedRecords<'_> {
        OrderedRecords { table: self }
    }
}

/// Serializes a table's records as a sequence of header-ordered maps.
///
/// A repeated header is emitted once, at its first position.
#[derive(Debug, Clone, Copy)]
pub struct OrderedRecords<'a> {
    table: &'a Table,
}

impl Serialize for OrderedRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen = HashSet::with_capacity(self.table.headers.len());
        let keys: Vec<&str> = self
            .table
            .headers
            .iter()
            .map(String::as_str)
            .filter(|key| seen.insert(*key))
            .collect();

        let mut seq = serializer.serialize_seq(Some(self.table.records.len()))?;
        for record in &self.table.records {
            seq.serialize_element(&OrderedRecord { keys: &keys, record })?;
        }
        seq.end()
    }
}

struct OrderedRecord<'a> {
    keys: &'a [&'a str],
    record: &'a Record,
}

impl Serialize for OrderedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for key in self.keys {
            map.serialize_entry(key, &self.record.get(key))?;
        }
        map.end()
    }
}

/// Parse the leading integer of `text`, or 0 if there is none.
///
/// Leading whitespace and one sign are accepted, then decimal digits up to the
/// first non-digit. `"30"`, `" 30"` and `"30 seats"` all give 30; `""`, `"n/a"`
/// and `"-"` give 0. Values beyond `i64` saturate.
pub fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
