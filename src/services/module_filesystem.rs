use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ModuleStore;

/// Filesystem-based module store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemModuleStore {
    root: PathBuf,
}

impl FilesystemModuleStore {
    /// Create a store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ModuleStore for FilesystemModuleStore {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full = self.resolve(path);
        debug!(path = %full.display(), "ensuring directory");
        fs::create_dir_all(full)?;
        Ok(())
    }

    fn create_dir_exclusive(&self, path: &Path) -> Result<(), AppError> {
        let full = self.resolve(path);
        debug!(path = %full.display(), "creating directory");
        // mkdir fails with EEXIST atomically; no separate exists() probe.
        fs::create_dir(full)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path);
        debug!(path = %full.display(), bytes = content.len(), "writing file");
        fs::write(full, content)?;
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full = self.resolve(path);
        match fs::remove_dir_all(&full) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
