//! Storage port for module directories.
//!
//! Paths are relative to the store root. Implementations decide where that
//! root lives (the working directory, a temp dir, memory).

use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem writes the module creator performs.
pub trait ModuleStore {
    /// Create a directory and its parents. No-op if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Create exactly one directory, failing with an `AlreadyExists` I/O
    /// error if it is already present. Must be atomic with respect to
    /// other creators.
    fn create_dir_exclusive(&self, path: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
