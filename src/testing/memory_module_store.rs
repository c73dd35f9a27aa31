use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ModuleStore;

#[derive(Debug, Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    failing_writes: BTreeSet<PathBuf>,
}

/// In-memory module store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryModuleStore {
    state: Arc<Mutex<State>>,
}

impl MemoryModuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().failing_writes.insert(path.into());
    }

    pub fn clear_failures(&self) {
        self.state.lock().unwrap().failing_writes.clear();
    }

    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().dirs.iter().cloned().collect()
    }

    pub fn files(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().files.keys().cloned().collect()
    }
}

impl ModuleStore for MemoryModuleStore {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn create_dir_exclusive(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.dirs.contains(path) || state.files.contains_key(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "File exists").into());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory").into());
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.failing_writes.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied").into());
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.dirs.retain(|dir| !dir.starts_with(path));
        state.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }
}
