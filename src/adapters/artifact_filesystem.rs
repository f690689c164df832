use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Writes artifacts to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let file = File::create(path).map_err(|e| AppError::write_failed(path, e))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes()).map_err(|e| AppError::write_failed(path, e))?;

        // Content is fully handed to the OS once the buffer is flushed; a sync
        // failure after that point does not fail the artifact.
        let file = writer.into_inner().map_err(|e| AppError::write_failed(path, e.into_error()))?;
        if let Err(e) = file.sync_all() {
            warn!(path = %path.display(), error = %e, "error closing file");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("a/b/c");

        FilesystemArtifactStore::new().ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn writes_and_replaces_content() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("talend.project");
        let store = FilesystemArtifactStore::new();

        store.write_artifact(&path, "first\n").unwrap();
        store.write_artifact(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn missing_parent_reports_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing/Foo_1.0.properties");

        let err = FilesystemArtifactStore::new().write_artifact(&path, "x").unwrap_err();

        match err {
            AppError::WriteFailed { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
