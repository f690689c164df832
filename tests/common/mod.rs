//! Shared testing utilities for talendroutine CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory named `routines-project`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("routines-project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        Self { root, project_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Default output directory of a generation run.
    pub fn output_dir(&self) -> PathBuf {
        self.project_dir.join("target/talend")
    }

    /// Build a command for invoking the compiled `talendroutine` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("talendroutine").expect("Failed to locate talendroutine binary");
        cmd.current_dir(&self.project_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Read a generated file from `dir`.
    pub fn read(&self, dir: &Path, name: &str) -> String {
        let path = dir.join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}

/// Values of `attr="..."` on every line containing `<element`.
#[allow(dead_code)]
pub fn attribute_values(xml: &str, element: &str, attr: &str) -> Vec<String> {
    let element_tag = format!("<{}", element);
    let needle = format!(" {}=\"", attr);
    xml.lines()
        .filter(|line| line.contains(&element_tag))
        .filter_map(|line| line.split(needle.as_str()).nth(1))
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

/// Whether `id` has the generated shape `_` + 22 alphanumerics.
#[allow(dead_code)]
pub fn is_generated_id(id: &str) -> bool {
    id.strip_prefix('_')
        .is_some_and(|body| body.len() == 22 && body.chars().all(|c| c.is_ascii_alphanumeric()))
}
