use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store; selected paths can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    failing: Arc<Mutex<HashSet<PathBuf>>>,
    fail_dirs: bool,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn failing_on(self, path: impl Into<PathBuf>) -> Self {
        self.failing.lock().unwrap().insert(path.into());
        self
    }

    /// Make directory creation fail.
    pub fn failing_dirs(mut self) -> Self {
        self.fail_dirs = true;
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        if self.fail_dirs {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.dirs.lock().unwrap().insert(dir.to_path_buf());
        Ok(())
    }

    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(AppError::write_failed(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
