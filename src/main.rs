//! Tasker: run one build task as a host plugin or as a standalone executable.
//!
//! This is the entry point for the `tasker` tool. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use std::process::ExitCode;
use tasker::exit_codes;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    tasker::log::init_tracing(if cli.verbose { "debug" } else { "warn" });

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
