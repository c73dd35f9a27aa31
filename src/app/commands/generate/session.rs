use std::io::Write;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::commands::create;
use crate::domain::{AppError, ModuleSpec, ModuleType};
use crate::ports::{LinePrompter, ModuleStore};

use super::input::NameInput;

pub const WELCOME: &str = "Welcome to the Module Generator!";
pub const NAME_PROMPT: &str = "Enter the name of the new module (or type 'exit' to quit): ";
pub const TYPE_PROMPT: &str = "Enter the type of the module (Generic, Data, Processing): ";
pub const EMPTY_NAME_MESSAGE: &str = "Module name cannot be empty. Please try again.";
pub const FAREWELL: &str = "Exiting the Module Generator. Goodbye!";

/// Tally of one interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub created: usize,
    pub failed: usize,
}

/// Run the interactive module generator until `exit` or end of input.
///
/// Creator failures are reported to `out` and never end the loop. Only
/// failures to prepare the base directory, read input, or write to `out`
/// are returned.
pub fn execute<S, P, W>(
    ctx: &AppContext<S>,
    prompter: &mut P,
    out: &mut W,
) -> Result<SessionSummary, AppError>
where
    S: ModuleStore,
    P: LinePrompter,
    W: Write,
{
    writeln!(out, "{WELCOME}\n")?;
    ctx.store().create_dir_all(ctx.base_dir())?;

    let mut summary = SessionSummary::default();

    loop {
        let Some(raw) = prompter.read_line(NAME_PROMPT)? else {
            debug!("input closed at name prompt");
            break;
        };

        let name = match NameInput::classify(&raw) {
            NameInput::Exit => break,
            NameInput::Empty => {
                writeln!(out, "{EMPTY_NAME_MESSAGE}")?;
                continue;
            }
            NameInput::Name(name) => name,
        };

        let Some(type_raw) = prompter.read_line(TYPE_PROMPT)? else {
            debug!(module = %name, "input closed at type prompt");
            break;
        };

        let spec = ModuleSpec::new(&name)?
            .with_base_dir(ctx.base_dir())
            .with_type(ModuleType::parse(&type_raw));

        match create::execute(ctx, &spec) {
            Ok(outcome) => {
                summary.created += 1;
                writeln!(out, "{outcome}")?;
            }
            Err(err) => {
                summary.failed += 1;
                writeln!(out, "{}", failure_message(&err))?;
            }
        }
    }

    writeln!(out, "{FAREWELL}")?;
    info!(created = summary.created, failed = summary.failed, "session finished");
    Ok(summary)
}

fn failure_message(err: &AppError) -> String {
    match err {
        AppError::ModuleExists { .. } => format!("Error: {err}."),
        other => format!("An error occurred while creating the module: {other}."),
    }
}
