//! Generation configuration loading from the project directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::dependency_files::load_dependency_file;
use crate::domain::config::{
    DEFAULT_DESCRIPTION, DEFAULT_OUTPUT_DIR, DEFAULT_PATH, DEFAULT_PURPOSE, DEFAULT_VERSION,
    resolve_against,
};
use crate::domain::{AppError, CONFIG_FILE_NAME, Dependency, ManifestConfig, RoutineConfigFile};

/// Inputs for one generation, as collected from the command line.
///
/// Every `Option` overrides the matching `talendroutine.toml` value; relative
/// paths are interpreted against `project_dir`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub project_dir: PathBuf,
    /// Explicit config file; must exist when given.
    pub config_path: Option<PathBuf>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub purpose: Option<String>,
    pub version: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub path: Option<String>,
    /// Dependency list files, appended after config-file dependencies.
    pub dependency_files: Vec<PathBuf>,
    /// Inline Maven coordinates, appended last.
    pub coordinates: Vec<String>,
}

/// Configuration and dependencies ready for the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGeneration {
    pub config: ManifestConfig,
    pub dependencies: Vec<Dependency>,
}

/// Load and merge the generation configuration.
pub fn load_config(options: &GenerateOptions) -> Result<ResolvedGeneration, AppError> {
    let project_dir = &options.project_dir;
    let file = read_config_file(options)?;
    let routine = &file.routine;

    let label = match options.label.clone().or_else(|| routine.label.clone()) {
        Some(label) => label,
        None => match file.project.name.clone() {
            Some(name) => name,
            None => directory_name(project_dir)?,
        },
    };

    let output_dir = options
        .output_dir
        .clone()
        .or_else(|| routine.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let config = ManifestConfig {
        label,
        description: options
            .description
            .clone()
            .or_else(|| routine.description.clone())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        purpose: options
            .purpose
            .clone()
            .or_else(|| routine.purpose.clone())
            .unwrap_or_else(|| DEFAULT_PURPOSE.to_string()),
        version: options
            .version
            .clone()
            .or_else(|| routine.resolved_version())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        output_dir: resolve_against(project_dir, &output_dir),
        path: options
            .path
            .clone()
            .or_else(|| routine.path.clone())
            .unwrap_or_else(|| DEFAULT_PATH.to_string()),
    };

    let mut dependencies = file.dependencies;
    for dependency_file in &options.dependency_files {
        let path = resolve_against(project_dir, dependency_file);
        let loaded = load_dependency_file(&path)?;
        debug!(file = %path.display(), count = loaded.len(), "loaded dependency list");
        dependencies.extend(loaded);
    }
    for coordinate in &options.coordinates {
        dependencies.push(Dependency::parse_coordinate(coordinate)?);
    }

    Ok(ResolvedGeneration { config, dependencies })
}

fn read_config_file(options: &GenerateOptions) -> Result<RoutineConfigFile, AppError> {
    let (path, required) = match &options.config_path {
        Some(explicit) => (resolve_against(&options.project_dir, explicit), true),
        None => (options.project_dir.join(CONFIG_FILE_NAME), false),
    };

    if !path.exists() {
        if required {
            return Err(AppError::ConfigMissing(path));
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(RoutineConfigFile::default());
    }

    let content = std::fs::read_to_string(&path)?;
    RoutineConfigFile::parse(&content)
}

/// Name of the project directory, used as the default label.
fn directory_name(dir: &Path) -> Result<String, AppError> {
    let absolute = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Cannot derive a routine label from {}; set [routine] label or pass --label",
                dir.display()
            ))
        })
}
