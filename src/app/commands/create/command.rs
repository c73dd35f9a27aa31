use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, CONFIG_FILE, ModuleConfig, ModuleSpec, README_FILE, render_readme};
use crate::ports::ModuleStore;

use super::outcome::ModuleOutcome;

/// Execute the create command.
///
/// Creates `<base_dir>/<name>/` with README.md and config.json, then any
/// folders the module type contributes. The module directory itself is
/// created exclusively: a pre-existing directory yields
/// `AppError::ModuleExists` and nothing is touched. If a later write fails,
/// the new directory is removed before the error is returned.
pub fn execute<S>(ctx: &AppContext<S>, spec: &ModuleSpec) -> Result<ModuleOutcome, AppError>
where
    S: ModuleStore,
{
    let store = ctx.store();
    let module_path = spec.module_path();

    // Names may contain separators; only the leaf is created exclusively.
    if let Some(parent) = module_path.parent() {
        store.create_dir_all(parent)?;
    }

    match store.create_dir_exclusive(&module_path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Err(AppError::ModuleExists {
                name: spec.name().to_string(),
                path: module_path.display().to_string(),
            });
        }
        Err(err) => return Err(err),
    }

    if let Err(err) = populate(store, spec, &module_path) {
        debug!(path = %module_path.display(), error = %err, "rolling back partial module");
        if let Err(cleanup) = store.remove_dir_all(&module_path) {
            warn!(
                path = %module_path.display(),
                error = %cleanup,
                "failed to remove partially created module"
            );
        }
        return Err(err);
    }

    info!(module = spec.name(), kind = %spec.module_type(), "module created");

    Ok(ModuleOutcome {
        name: spec.name().to_string(),
        module_type: spec.module_type().clone(),
        path: module_path,
    })
}

fn populate<S: ModuleStore>(
    store: &S,
    spec: &ModuleSpec,
    module_path: &Path,
) -> Result<(), AppError> {
    store.write_file(&module_path.join(README_FILE), &render_readme(spec))?;

    let config = ModuleConfig::for_spec(spec).to_json()?;
    store.write_file(&module_path.join(CONFIG_FILE), &config)?;

    for dir in spec.module_type().extra_dirs() {
        store.create_dir_all(&module_path.join(dir))?;
    }

    Ok(())
}
