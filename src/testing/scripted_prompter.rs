use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::LinePrompter;

/// Prompter that replays canned answers and records every prompt shown.
///
/// Returns `None` once the script runs out, like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), prompts: Vec::new() }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LinePrompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
