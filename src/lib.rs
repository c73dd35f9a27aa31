//! modgen: interactively scaffold module folders with a README and config.json.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use std::path::{Path, PathBuf};

use app::{
    AppContext,
    commands::{create, generate as session},
};
use services::{FilesystemModuleStore, TerminalPrompter};

pub use app::commands::create::ModuleOutcome;
pub use app::commands::generate::SessionSummary;
pub use domain::{AppError, ModuleConfig, ModuleSpec, ModuleType};

/// Create one module under `base_dir`, relative to the current directory.
///
/// Fails with `AppError::ModuleExists` if `<base_dir>/<name>` is already present.
pub fn create_module(
    name: &str,
    base_dir: &Path,
    module_type: ModuleType,
) -> Result<ModuleOutcome, AppError> {
    create_module_at(std::env::current_dir()?, name, base_dir, module_type)
}

/// Create one module under `root/base_dir`.
///
/// The returned outcome path stays relative to `root`.
pub fn create_module_at(
    root: PathBuf,
    name: &str,
    base_dir: &Path,
    module_type: ModuleType,
) -> Result<ModuleOutcome, AppError> {
    let ctx = AppContext::new(FilesystemModuleStore::new(root), base_dir);

    let spec = ModuleSpec::new(name)?.with_base_dir(base_dir).with_type(module_type);
    create::execute(&ctx, &spec)
}

/// Run the interactive generator on stdin/stdout until the user exits.
pub fn generate(base_dir: &Path) -> Result<SessionSummary, AppError> {
    let store = FilesystemModuleStore::current()?;
    let ctx = AppContext::new(store, base_dir);
    let mut prompter = TerminalPrompter::new();
    let mut stdout = std::io::stdout();

    session::execute(&ctx, &mut prompter, &mut stdout)
}
