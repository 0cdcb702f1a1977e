//! Export row trait for spreadsheet serialization.

use chrono::{DateTime, Utc};

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A text cell.
    Text(String),
    /// An integer cell.
    Integer(i64),
    /// A floating-point cell.
    Float(f64),
    /// A boolean cell.
    Boolean(bool),
    /// A timestamp cell, rendered in RFC 3339.
    Timestamp(DateTime<Utc>),
    /// An empty cell.
    Empty,
}

impl CellValue {
    /// Build a text cell from an optional string, empty when `None`.
    pub fn opt_text(value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => Self::Text(v.into()),
            None => Self::Empty,
        }
    }

    /// Build an integer cell from an optional value, empty when `None`.
    pub fn opt_integer(value: Option<i64>) -> Self {
        match value {
            Some(v) => Self::Integer(v),
            None => Self::Empty,
        }
    }

    /// Build a timestamp cell from an optional value, empty when `None`.
    pub fn opt_timestamp(value: Option<DateTime<Utc>>) -> Self {
        match value {
            Some(v) => Self::Timestamp(v),
            None => Self::Empty,
        }
    }
}

/// A detail view that can be serialized as one spreadsheet row.
///
/// `columns()` and `cells()` must agree on length and order; the export
/// writer in `adminhub-service` writes the column names as a header row
/// followed by one row per record.
pub trait ExportRow {
    /// Column headers, in output order.
    fn columns() -> &'static [&'static str];

    /// The cell values for this record, in column order.
    fn cells(&self) -> Vec<CellValue>;
}
