use std::io;

use thiserror::Error;

/// Library-wide error type for modgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Module directory already exists at the target location.
    #[error("Module '{name}' already exists at '{path}'")]
    ModuleExists { name: String, path: String },

    /// Module name is empty after trimming.
    #[error("Invalid module name '{0}': must not be empty")]
    InvalidModuleName(String),

    /// config.json could not be serialized.
    #[error("Failed to serialize module config: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Interactive input could not be read.
    #[error("Failed to read input: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ModuleExists { .. } => io::ErrorKind::AlreadyExists,
            AppError::InvalidModuleName(_) => io::ErrorKind::InvalidInput,
            AppError::Serialization(_) => io::ErrorKind::InvalidData,
            AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
