//! Configuration for profiles, default path and preview limits

use crate::profile::{DEFAULT_PROFILE, PRESET_NAMES, Profile};
use crate::reader::{LoaderKind, PreviewLimits};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File inspected when no path is given
pub const DEFAULT_PATH: &str = "Reconfile fornecedores.xlsx";

/// Main probe configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Replaces [`DEFAULT_PATH`]
    #[serde(default)]
    pub default_path: Option<PathBuf>,
    /// Profile used when none is requested
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub preview: PreviewConfig,
    /// User profiles; these shadow presets with the same name
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Overrides for the per-loader preview limits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub width: Option<usize>,
}

impl ProbeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: ProbeConfig = toml::from_str(content)?;
        for (name, profile) in config.profiles.iter_mut() {
            profile.name = name.clone();
        }
        Ok(config)
    }

    pub fn default_path(&self) -> PathBuf {
        self.default_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))
    }

    pub fn default_profile_name(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// Resolve a profile: config profiles first, then presets
    pub fn profile(&self, name: &str) -> Result<Profile> {
        if let Some(profile) = self.profiles.get(name) {
            return Ok(profile.clone());
        }
        if let Some(profile) = Profile::preset(name) {
            return Ok(profile);
        }

        let mut available: Vec<&str> = PRESET_NAMES.to_vec();
        available.extend(self.profiles.keys().map(String::as_str));
        available.sort_unstable();
        available.dedup();
        anyhow::bail!(
            "Unknown profile '{}' (available: {})",
            name,
            available.join(", ")
        )
    }

    /// Preview limits for a loader with configured overrides applied
    pub fn preview_limits(&self, loader: LoaderKind) -> PreviewLimits {
        let mut limits = PreviewLimits::for_loader(loader);
        if let Some(rows) = self.preview.rows {
            limits.rows = rows;
        }
        if self.preview.columns.is_some() {
            limits.columns = self.preview.columns;
        }
        if self.preview.width.is_some() {
            limits.width = self.preview.width;
        }
        limits
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("rows", self.preview.rows),
            ("columns", self.preview.columns),
            ("width", self.preview.width),
        ] {
            if value == Some(0) {
                anyhow::bail!("Configuration error: preview {} must be greater than 0", key);
            }
        }

        for (name, profile) in &self.profiles {
            if profile.required.is_empty() {
                anyhow::bail!(
                    "Configuration error: profile '{}' has no required columns",
                    name
                );
            }
            if let Some(rule) = profile.rules.iter().find(|rule| rule.is_empty()) {
                anyhow::bail!(
                    "Configuration error: rule for '{}' in profile '{}' needs all_of or any_of",
                    rule.target,
                    name
                );
            }
        }

        if let Some(name) = &self.profile {
            self.profile(name)?;
        }

        Ok(())
    }
}
