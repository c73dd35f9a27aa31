//! Files written into every generated module.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::{AppError, ModuleSpec};

/// Root directory for modules when none is given.
pub const DEFAULT_BASE_DIR: &str = "Modules";
pub const README_FILE: &str = "README.md";
pub const CONFIG_FILE: &str = "config.json";
/// Author recorded in every config.json.
pub const CREATED_BY: &str = "Outman";
/// Version recorded in every config.json.
pub const MODULE_VERSION: &str = "1.0.0";

/// Contents of `config.json`. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub module_name: String,
    pub module_type: String,
    pub created_by: String,
    pub version: String,
    pub description: String,
}

impl ModuleConfig {
    pub fn for_spec(spec: &ModuleSpec) -> Self {
        Self {
            module_name: spec.name().to_string(),
            module_type: spec.module_type().label().to_string(),
            created_by: CREATED_BY.to_string(),
            version: MODULE_VERSION.to_string(),
            description: format!("Configuration for {} module", spec.name()),
        }
    }

    /// Serialize with 4-space indentation.
    pub fn to_json(&self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        let json =
            String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(json)
    }
}

/// README body: `# <name>\n\nThis is the <name> module of type '<type>'.`
pub fn render_readme(spec: &ModuleSpec) -> String {
    format!(
        "# {name}\n\nThis is the {name} module of type '{kind}'.",
        name = spec.name(),
        kind = spec.module_type().label()
    )
}
