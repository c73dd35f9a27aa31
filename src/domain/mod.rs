pub mod artifacts;
pub mod error;
pub mod module_spec;
pub mod module_type;

pub use artifacts::{
    CONFIG_FILE, CREATED_BY, DEFAULT_BASE_DIR, MODULE_VERSION, ModuleConfig, README_FILE,
    render_readme,
};
pub use error::AppError;
pub use module_spec::ModuleSpec;
pub use module_type::ModuleType;
