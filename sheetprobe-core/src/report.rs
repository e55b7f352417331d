//! Probe report structures

use crate::alias::ColumnMapping;
use crate::check::{ColumnCheck, Suggestion};
use crate::reader::Dataset;
use serde::Serialize;

/// Everything a successful probe found out about a spreadsheet
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Name of the profile the columns were checked against
    pub profile: String,
    pub dataset: Dataset,
    pub check: ColumnCheck,
    /// Empty unless some required column is missing
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<MappingReport>,
}

impl Report {
    pub fn all_found(&self) -> bool {
        self.check.all_found()
    }
}

/// Alias mapping of the headers and the presence check over mapped keys
#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    pub columns: Vec<ColumnMapping>,
    pub check: ColumnCheck,
}
