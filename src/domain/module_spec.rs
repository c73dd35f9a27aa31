use std::path::{Path, PathBuf};

use super::artifacts::DEFAULT_BASE_DIR;
use super::{AppError, ModuleType};

/// Everything needed to materialize one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    name: String,
    base_dir: PathBuf,
    module_type: ModuleType,
}

impl ModuleSpec {
    /// Build a spec under the default `Modules` root with type `Generic`.
    ///
    /// The name is trimmed; an empty result is rejected. No other character
    /// checks are applied.
    pub fn new(name: &str) -> Result<Self, AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidModuleName(name.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            module_type: ModuleType::Generic,
        })
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = module_type;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn module_type(&self) -> &ModuleType {
        &self.module_type
    }

    /// `<base_dir>/<name>`.
    pub fn module_path(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }
}
