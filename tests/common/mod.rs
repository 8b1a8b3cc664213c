//! Shared testing utilities for course-planner CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a data file under the working directory and return its path.
    pub fn write_data_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, contents).expect("Failed to write test data file");
        path
    }

    /// Write the default `courselist.csv` the binary looks for.
    pub fn write_default_data_file(&self, contents: &str) -> PathBuf {
        self.write_data_file("courselist.csv", contents)
    }

    /// Build a command for invoking the compiled `course-planner` binary
    /// within the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("course-planner").expect("Failed to locate course-planner binary");
        cmd.current_dir(self.work_dir());
        cmd
    }
}
