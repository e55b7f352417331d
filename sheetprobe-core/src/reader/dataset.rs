//! Dataset data structures

use super::{LoaderKind, PreviewLimits};
use calamine::Data;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// First worksheet of a spreadsheet, as seen by one loader
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub path: PathBuf,
    /// Name of the worksheet that was read
    pub sheet: String,
    pub loader: LoaderKind,
    pub shape: Shape,
    /// Column names in sheet order
    pub columns: Vec<String>,
    pub preview: Vec<PreviewRow>,
    pub limits: PreviewLimits,
}

/// Row and column counts reported for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

/// A stringified row shown in the preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    /// 0-based data row index (table loader) or 1-based sheet row (cells loader)
    pub label: usize,
    pub cells: Vec<String>,
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    DateTime(String),
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Check if the cell cannot serve as a header name.
    ///
    /// Blank text, zero and `false` count as missing headers alongside empty cells.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(n) => *n == 0.0,
            CellValue::Boolean(b) => !b,
            CellValue::DateTime(_) | CellValue::Error(_) => false,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::Empty => CellValue::Empty,
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(datetime) => CellValue::DateTime(datetime.to_string()),
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            // Whole numbers are stored as floats by most writers
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
            CellValue::DateTime(s) => f.write_str(s),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}
