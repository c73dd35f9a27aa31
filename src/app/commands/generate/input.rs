/// One answer to the module-name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    /// `exit` in any letter case.
    Exit,
    /// Nothing but whitespace.
    Empty,
    /// A trimmed, non-empty module name.
    Name(String),
}

impl NameInput {
    pub fn classify(raw: &str) -> NameInput {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            NameInput::Exit
        } else if trimmed.is_empty() {
            NameInput::Empty
        } else {
            NameInput::Name(trimmed.to_string())
        }
    }
}
