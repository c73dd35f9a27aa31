use std::path::{Path, PathBuf};

use crate::ports::ModuleStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ModuleStore> {
    store: S,
    base_dir: PathBuf,
}

impl<S: ModuleStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, base_dir: impl Into<PathBuf>) -> Self {
        Self { store, base_dir: base_dir.into() }
    }

    /// Get a reference to the module store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Directory new modules are created under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
