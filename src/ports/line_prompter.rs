use crate::domain::AppError;

/// Port for reading one line of interactive input.
pub trait LinePrompter {
    /// Show `prompt` and read a line.
    ///
    /// Returns `Ok(None)` once input is exhausted (EOF or interrupt).
    /// The returned text is not trimmed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;
}
