//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemArtifactStore, RandomIdGenerator, SystemClock};
use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{generate, init},
};
use crate::domain::{Dependency, ManifestConfig};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::app::config::{GenerateOptions, ResolvedGeneration};
pub use crate::domain::AppError;

/// Create an `AppContext` backed by the real clock, RNG and filesystem.
fn create_context() -> AppContext<RandomIdGenerator, SystemClock, FilesystemArtifactStore> {
    AppContext::new(RandomIdGenerator::new(), SystemClock, FilesystemArtifactStore::new())
}

/// Write the routine manifest and project file for an explicit configuration.
pub fn generate_manifest(
    config: &ManifestConfig,
    dependencies: &[Dependency],
) -> Result<GenerateOutcome, AppError> {
    generate::execute(&create_context(), config, dependencies)
}

/// Resolve configuration from the project directory and generate.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let resolved = load_config(options)?;
    generate_manifest(&resolved.config, &resolved.dependencies)
}

/// Write a starter `talendroutine.toml` into `project_dir`.
pub fn init_at(project_dir: &Path, force: bool) -> Result<PathBuf, AppError> {
    init::execute(project_dir, force)
}
