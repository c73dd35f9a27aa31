//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, DEFAULT_BASE_DIR};

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(
    about = "Interactively scaffold module folders with a README and config.json",
    long_about = None
)]
struct Cli {
    /// Directory that holds generated modules
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result: Result<(), AppError> = crate::generate(&cli.base_dir).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
