//! Probe failures

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a spreadsheet could not be inspected
///
/// Every failure happens while loading; once a dataset exists the column
/// checks cannot fail.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook has no worksheets: {}", .0.display())]
    NoSheets(PathBuf),

    #[error("Failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

impl ProbeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProbeError::NotFound(_))
    }
}
