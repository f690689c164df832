use std::io;
use std::path::Path;

use crate::domain::AppError;

/// Port for persisting generated artifacts.
pub trait ArtifactStore {
    /// Create `dir` and any missing parents.
    fn ensure_dir(&self, dir: &Path) -> io::Result<()>;

    /// Write `content` to `path`, replacing any existing file.
    ///
    /// Failures opening or writing the file surface as [`AppError::WriteFailed`]
    /// carrying `path`.
    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
