use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::{CommandContext, CommandError};
use dispatch::{LocalCommand, LocalDispatch, StoreCommand, StoreDispatch};
use stringlens_core::CatalogError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Commands that never touch the catalog (analyze, config, completions, help)
    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    match StoreDispatch::from_cli(cli) {
        Some(dispatch) => dispatch.execute(&ctx).await,
        None => Ok(()),
    }
}

/// Returns the default log filter for the given verbosity flags.
fn default_log_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Initializes tracing output on stderr.
///
/// `RUST_LOG` takes precedence over the `--verbose`/`--quiet` defaults.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(cli.verbose, cli.quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_ansi(!cli.no_color)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Catalog(CatalogError::NotFound { .. }) => "NOT_FOUND",
        CommandError::Catalog(CatalogError::AlreadyExists { .. }) => "ALREADY_EXISTS",
        CommandError::Store(_) => "STORE_ERROR",
        CommandError::Query(_) => "QUERY_ERROR",
        CommandError::Criteria(_) => "INVALID_FILTER",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the numeric exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Query(_) | CommandError::Criteria(_) | CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Catalog(_) => 4,
        CommandError::Config(_) | CommandError::Store(_) => 5,
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}
