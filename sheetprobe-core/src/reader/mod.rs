//! Excel/ODS file reader using calamine

use crate::error::ProbeError;
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub mod dataset;

pub use dataset::{CellValue, Dataset, PreviewRow, Shape};

/// How the first worksheet is turned into a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    /// First row becomes column labels; shape counts data rows only
    Table,
    /// Raw cells addressed from A1; shape includes the header row
    #[default]
    Cells,
}

impl LoaderKind {
    pub fn as_str(&self) -> &str {
        match self {
            LoaderKind::Table => "table",
            LoaderKind::Cells => "cells",
        }
    }
}

/// Bounds applied to the row preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewLimits {
    pub rows: usize,
    /// Maximum number of columns shown (all when `None`)
    pub columns: Option<usize>,
    /// Maximum characters per cell (untruncated when `None`)
    pub width: Option<usize>,
}

impl PreviewLimits {
    /// Default limits for each loader
    pub fn for_loader(kind: LoaderKind) -> Self {
        match kind {
            LoaderKind::Table => Self {
                rows: 3,
                columns: None,
                width: None,
            },
            LoaderKind::Cells => Self {
                rows: 3,
                columns: Some(5),
                width: Some(20),
            },
        }
    }

    fn clip(&self, text: String) -> String {
        match self.width {
            Some(width) if text.chars().count() > width => text.chars().take(width).collect(),
            _ => text,
        }
    }

    fn column_count(&self, available: usize) -> usize {
        self.columns.map_or(available, |max| max.min(available))
    }
}

/// Load the first worksheet of a spreadsheet with the given loader
pub fn load<P: AsRef<Path>>(
    path: P,
    kind: LoaderKind,
    limits: &PreviewLimits,
) -> Result<Dataset, ProbeError> {
    let path = path.as_ref();
    debug!(path = %path.display(), loader = kind.as_str(), "loading workbook");

    let dataset = match kind {
        LoaderKind::Table => load_table(path, limits)?,
        LoaderKind::Cells => load_cells(path, limits)?,
    };

    debug!(
        sheet = %dataset.sheet,
        rows = dataset.shape.rows,
        columns = dataset.shape.columns,
        "loaded first worksheet"
    );
    Ok(dataset)
}

fn open_first_sheet(path: &Path) -> Result<(String, Range<Data>), ProbeError> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|source| ProbeError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let sheet = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or_else(|| ProbeError::NoSheets(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| ProbeError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    Ok((sheet, range))
}

/// Read the used range as a table whose first row holds the column labels.
///
/// Columns are counted from column A so blank leading columns keep their place.
fn load_table(path: &Path, limits: &PreviewLimits) -> Result<Dataset, ProbeError> {
    let (sheet, range) = open_first_sheet(path)?;

    let (header_row, last_row, width) = match (range.start(), range.end()) {
        (Some((first, _)), Some((last, col))) if !range.is_empty() => {
            (first, last, col as usize + 1)
        }
        _ => (0, 0, 0),
    };

    let cell = |row: u32, col: usize| -> CellValue {
        range
            .get_value((row, col as u32))
            .map(CellValue::from)
            .unwrap_or(CellValue::Empty)
    };

    let columns: Vec<String> = (0..width)
        .map(|index| {
            let value = cell(header_row, index);
            if value.is_empty() {
                format!("Unnamed: {}", index)
            } else {
                value.to_string()
            }
        })
        .collect();

    let data_rows = if width == 0 {
        0
    } else {
        (last_row - header_row) as usize
    };
    let visible = limits.column_count(width);
    let preview = (0..data_rows.min(limits.rows))
        .map(|label| PreviewRow {
            label,
            cells: (0..visible)
                .map(|col| limits.clip(cell(header_row + 1 + label as u32, col).to_string()))
                .collect(),
        })
        .collect();

    Ok(Dataset {
        path: path.to_path_buf(),
        sheet,
        loader: LoaderKind::Table,
        shape: Shape {
            rows: data_rows,
            columns: width,
        },
        columns,
        preview,
        limits: *limits,
    })
}

/// Read raw cells by 1-based sheet coordinates starting at A1
fn load_cells(path: &Path, limits: &PreviewLimits) -> Result<Dataset, ProbeError> {
    if !path.exists() {
        return Err(ProbeError::NotFound(path.to_path_buf()));
    }

    let (sheet, range) = open_first_sheet(path)?;

    // An empty sheet still reports a single A1 cell
    let (max_row, max_column) = match range.end() {
        Some((row, col)) if !range.is_empty() => (row as usize + 1, col as usize + 1),
        _ => (1, 1),
    };

    let cell = |row: usize, col: usize| -> CellValue {
        range
            .get_value(((row - 1) as u32, (col - 1) as u32))
            .map(CellValue::from)
            .unwrap_or(CellValue::Empty)
    };

    let columns: Vec<String> = (1..=max_column)
        .map(|col| {
            let value = cell(1, col);
            if value.is_falsy() {
                format!("Coluna_{}", col)
            } else {
                value.to_string().trim().to_string()
            }
        })
        .collect();

    let last_column = limits.column_count(max_column);
    let preview = (1..=limits.rows.min(max_row))
        .map(|row| PreviewRow {
            label: row,
            cells: (1..=last_column)
                .map(|col| limits.clip(cell(row, col).to_string()))
                .collect(),
        })
        .collect();

    Ok(Dataset {
        path: path.to_path_buf(),
        sheet,
        loader: LoaderKind::Cells,
        shape: Shape {
            rows: max_row,
            columns: max_column,
        },
        columns,
        preview,
        limits: *limits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_counts_characters() {
        let limits = PreviewLimits::for_loader(LoaderKind::Cells);
        assert_eq!(limits.clip("short".to_string()), "short");
        assert_eq!(limits.clip("a".repeat(25)), "a".repeat(20));
        // Multi-byte characters are not split
        assert_eq!(limits.clip("ç".repeat(21)).chars().count(), 20);
    }

    #[test]
    fn test_table_limits_are_unbounded() {
        let limits = PreviewLimits::for_loader(LoaderKind::Table);
        assert_eq!(limits.column_count(12), 12);
        assert_eq!(limits.clip("x".repeat(40)).len(), 40);
        assert_eq!(PreviewLimits::for_loader(LoaderKind::Cells).column_count(12), 5);
    }

    #[test]
    fn test_missing_file_by_loader() {
        let limits = PreviewLimits::for_loader(LoaderKind::Cells);
        let missing = Path::new("does/not/exist.xlsx");

        let err = load(missing, LoaderKind::Cells, &limits).unwrap_err();
        assert!(matches!(err, ProbeError::NotFound(_)));

        let err = load(missing, LoaderKind::Table, &limits).unwrap_err();
        assert!(matches!(err, ProbeError::Open { .. }));
    }
}
