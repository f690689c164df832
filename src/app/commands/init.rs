//! Init command - writes a starter `talendroutine.toml`.

use std::path::{Path, PathBuf};

use crate::adapters::templates::{CONFIG_TEMPLATE, asset_content};
use crate::domain::{AppError, CONFIG_FILE_NAME};

/// Execute the init command.
///
/// Creates `{project_dir}/talendroutine.toml` with every option commented
/// out. An existing file is only replaced when `force` is set.
pub fn execute(project_dir: &Path, force: bool) -> Result<PathBuf, AppError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(AppError::ConfigExists(config_path));
    }

    std::fs::create_dir_all(project_dir)?;
    std::fs::write(&config_path, asset_content(CONFIG_TEMPLATE)?)
        .map_err(|e| AppError::write_failed(&config_path, e))?;

    Ok(config_path)
}
