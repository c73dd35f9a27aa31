use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::LinePrompter;

/// Reads answers from the controlling terminal.
///
/// On a TTY this uses a dialoguer text input; when stdin or stdout is
/// redirected it prints the prompt verbatim and reads a raw line so piped
/// sessions stay scriptable.
#[derive(Debug)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() && io::stdout().is_terminal() }
    }

    fn read_interactive(&self, prompt: &str) -> Result<Option<String>, AppError> {
        // dialoguer's theme appends its own ": " separator.
        let label = prompt.trim_end().trim_end_matches(':');
        match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err))
                if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                Ok(None)
            }
            Err(err) => Err(AppError::prompt_error(err.to_string())),
        }
    }

    fn read_piped(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| AppError::prompt_error(e.to_string()))?;
        if read == 0 {
            // Keep the farewell on its own line when input ends mid-prompt.
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePrompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if self.interactive { self.read_interactive(prompt) } else { self.read_piped(prompt) }
    }
}
