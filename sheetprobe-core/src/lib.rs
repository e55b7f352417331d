//! sheetprobe-core: Core library for spreadsheet header diagnostics
//!
//! Loads the first worksheet of a spreadsheet, checks its headers against a
//! required-column profile and suggests mappings for the columns that are
//! missing.

pub mod alias;
pub mod check;
pub mod config;
pub mod error;
pub mod profile;
pub mod reader;
pub mod report;

use std::path::Path;
use tracing::debug;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use profile::{Profile, SuggestionRule};
pub use reader::{Dataset, LoaderKind, PreviewLimits};
pub use report::{MappingReport, Report};

/// Main probe interface
pub struct Probe {
    profile: Profile,
    loader: LoaderKind,
    limits: PreviewLimits,
    mapping: bool,
}

impl Probe {
    /// Create a probe using the profile's loader and its default limits
    pub fn new(profile: Profile) -> Self {
        let loader = profile.loader;
        Self {
            profile,
            loader,
            limits: PreviewLimits::for_loader(loader),
            mapping: false,
        }
    }

    /// Switch loader, resetting the preview limits to that loader's defaults
    pub fn with_loader(mut self, loader: LoaderKind) -> Self {
        self.loader = loader;
        self.limits = PreviewLimits::for_loader(loader);
        self
    }

    pub fn with_limits(mut self, limits: PreviewLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Also map headers to canonical keys
    pub fn with_mapping(mut self, enabled: bool) -> Self {
        self.mapping = enabled;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn loader(&self) -> LoaderKind {
        self.loader
    }

    /// Inspect a spreadsheet file
    pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<Report, ProbeError> {
        let dataset = reader::load(path, self.loader, &self.limits)?;

        let check = check::check_required(&dataset.columns, &self.profile.required);
        let suggestions = if check.all_found() {
            Vec::new()
        } else {
            check::suggest(&dataset.columns, &self.profile)
        };
        debug!(
            profile = %self.profile.name,
            missing = check.missing.len(),
            suggestions = suggestions.len(),
            "probe finished"
        );

        let mapping = self.mapping.then(|| {
            let columns = alias::map_columns(&dataset.columns);
            let check = alias::check_mapped(&columns, &self.profile.required);
            MappingReport { columns, check }
        });

        Ok(Report {
            profile: self.profile.name.clone(),
            dataset,
            check,
            suggestions,
            mapping,
        })
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
