use std::fmt;
use std::path::PathBuf;

use crate::domain::ModuleType;

/// A module that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOutcome {
    pub name: String,
    pub module_type: ModuleType,
    pub path: PathBuf,
}

impl ModuleOutcome {
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl fmt::Display for ModuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Module '{}' of type '{}' created successfully at '{}'.",
            self.name,
            self.module_type,
            self.display_path()
        )
    }
}
