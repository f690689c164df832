//! Routine manifest configuration: the `talendroutine.toml` file format and the
//! resolved, immutable [`ManifestConfig`] handed to the generator.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{AppError, Dependency};

pub const CONFIG_FILE_NAME: &str = "talendroutine.toml";

pub const DEFAULT_DESCRIPTION: &str = "Talend routines";
pub const DEFAULT_PURPOSE: &str = "Talend routines";
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_OUTPUT_DIR: &str = "target/talend";
pub const DEFAULT_PATH: &str = "routines";

/// Settings for one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    pub label: String,
    pub description: String,
    pub purpose: String,
    /// `major.minor`, inserted verbatim.
    pub version: String,
    pub output_dir: PathBuf,
    /// Repository folder holding the routine inside the Talend project.
    pub path: String,
}

impl ManifestConfig {
    /// Configuration with every default applied for the given label and output directory.
    pub fn new(label: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            purpose: DEFAULT_PURPOSE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            output_dir: output_dir.into(),
            path: DEFAULT_PATH.to_string(),
        }
    }

    /// `{label}_{version}`, the stem shared by the manifest and content reference.
    pub fn item_stem(&self) -> String {
        format!("{}_{}", self.label, self.version)
    }

    /// `{label}_{version}.properties`
    pub fn properties_file_name(&self) -> String {
        format!("{}.properties", self.item_stem())
    }
}

/// Parsed `talendroutine.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutineConfigFile {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub routine: RoutineSection,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutineSection {
    pub label: Option<String>,
    pub description: Option<String>,
    pub purpose: Option<String>,
    pub version: Option<String>,
    pub major_version: Option<u32>,
    pub minor_version: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub path: Option<String>,
}

impl RoutineSection {
    /// Explicit `version`, else `major_version.minor_version` when either is set.
    pub fn resolved_version(&self) -> Option<String> {
        if let Some(version) = &self.version {
            return Some(version.clone());
        }
        match (self.major_version, self.minor_version) {
            (None, None) => None,
            (major, minor) => Some(format!("{}.{}", major.unwrap_or(1), minor.unwrap_or(0))),
        }
    }
}

impl RoutineConfigFile {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
