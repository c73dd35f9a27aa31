//! Shared testing utilities for modgen CLI tests.

use assert_cmd::Command;
use modgen::ModuleConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI sessions.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `modgen` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("modgen").expect("Failed to locate modgen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Run a session feeding `answers` one per line on stdin.
    pub fn session(&self, answers: &[&str]) -> assert_cmd::assert::Assert {
        let mut stdin = answers.join("\n");
        stdin.push('\n');
        self.cli().write_stdin(stdin).assert()
    }

    /// Path to the default `Modules` directory.
    pub fn modules_path(&self) -> PathBuf {
        self.work_dir.join("Modules")
    }

    pub fn module_path(&self, name: &str) -> PathBuf {
        self.modules_path().join(name)
    }

    /// Sorted entry names directly inside a module directory.
    pub fn module_entries(&self, name: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.module_path(name))
            .expect("module directory should be readable")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn read_readme(&self, name: &str) -> String {
        fs::read_to_string(self.module_path(name).join("README.md"))
            .expect("README.md should exist")
    }

    pub fn read_config(&self, name: &str) -> ModuleConfig {
        let raw = fs::read_to_string(self.module_path(name).join("config.json"))
            .expect("config.json should exist");
        serde_json::from_str(&raw).expect("config.json should be valid JSON")
    }

    /// Assert that only the base directory exists and it is empty.
    pub fn assert_modules_empty(&self) {
        let entries = fs::read_dir(self.modules_path()).expect("Modules should exist").count();
        assert_eq!(entries, 0, "Modules directory should be empty");
    }
}
