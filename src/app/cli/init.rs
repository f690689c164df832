//! Init command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_init(project_dir: PathBuf, force: bool) -> Result<(), AppError> {
    let path = crate::app::api::init_at(&project_dir, force)?;
    println!("✅ Created {}", path.display());
    Ok(())
}
