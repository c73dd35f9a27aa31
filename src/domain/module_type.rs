use std::fmt;

/// Module category selected at creation time.
///
/// Each variant contributes the extra subdirectories created after the
/// base artifacts. Unrecognised input is kept verbatim as `Custom` and
/// behaves like `Generic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ModuleType {
    /// Plain module: README and config only.
    #[default]
    Generic,
    /// Data module: adds a `datasets/` folder.
    Data,
    /// Processing module: adds a `scripts/` folder.
    Processing,
    /// Any other label the user typed.
    Custom(String),
}

impl ModuleType {
    /// Built-in types offered at the prompt, in display order.
    #[cfg(test)]
    pub(crate) const BUILTIN: [ModuleType; 3] =
        [ModuleType::Generic, ModuleType::Data, ModuleType::Processing];

    /// Parse user input. Blank input selects `Generic`.
    pub fn parse(input: &str) -> ModuleType {
        match input.trim() {
            "" | "Generic" => ModuleType::Generic,
            "Data" => ModuleType::Data,
            "Processing" => ModuleType::Processing,
            other => ModuleType::Custom(other.to_string()),
        }
    }

    /// Label written into README.md and config.json.
    pub fn label(&self) -> &str {
        match self {
            ModuleType::Generic => "Generic",
            ModuleType::Data => "Data",
            ModuleType::Processing => "Processing",
            ModuleType::Custom(label) => label,
        }
    }

    /// Subdirectories this type adds inside the module directory.
    pub fn extra_dirs(&self) -> &'static [&'static str] {
        match self {
            ModuleType::Data => &["datasets"],
            ModuleType::Processing => &["scripts"],
            ModuleType::Generic | ModuleType::Custom(_) => &[],
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
