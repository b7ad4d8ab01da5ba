//! Implementation of the `tasker delegate` command.
//!
//! Runs a wrapped executable exactly as the host entry would and forwards
//! its stdout to the console.

use crate::cli::DelegateArgs;
use tasker::dispatch::run_delegated;
use tasker::{ConsoleLog, Result, TaskerError};

/// Execute the `tasker delegate` command.
///
/// The program's exit status is reported on stderr. It only fails this
/// command when `--propagate-exit` is given.
pub fn cmd_delegate(args: DelegateArgs) -> Result<()> {
    let tokens = collect_tokens(&args)?;
    let outcome = run_delegated(&args.program, &tokens, &ConsoleLog)?;

    match outcome.exit_code {
        Some(code) => eprintln!(
            "{} exited with code {} ({} line(s))",
            args.program.display(),
            code,
            outcome.lines
        ),
        None => eprintln!(
            "{} terminated without an exit code ({} line(s))",
            args.program.display(),
            outcome.lines
        ),
    }

    if args.propagate_exit && !outcome.is_success() {
        return Err(TaskerError::ChildFailed {
            program: args.program,
            exit_code: outcome.exit_code,
        });
    }

    Ok(())
}

/// Arguments for the program, from `--command-line` or the trailing tokens.
pub fn collect_tokens(args: &DelegateArgs) -> Result<Vec<String>> {
    match &args.command_line {
        Some(line) => shell_words::split(line).map_err(|e| {
            TaskerError::Config(format!(
                "failed to parse command line '{}': {}\n\
                 Fix: check for unmatched quotes.",
                line, e
            ))
        }),
        None => Ok(args.tokens.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn delegate_args(command_line: Option<&str>, tokens: &[&str]) -> DelegateArgs {
        DelegateArgs {
            program: PathBuf::from("stamp"),
            command_line: command_line.map(str::to_string),
            propagate_exit: false,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_collect_tokens_from_trailing_args() {
        let args = delegate_args(None, &["Count=5", "Label=hello"]);
        assert_eq!(collect_tokens(&args).unwrap(), ["Count=5", "Label=hello"]);
    }

    #[test]
    fn test_collect_tokens_splits_quoted_command_line() {
        let args = delegate_args(Some(" \"Count=5\" \"Label=hello world\""), &[]);
        assert_eq!(
            collect_tokens(&args).unwrap(),
            ["Count=5", "Label=hello world"]
        );
    }

    #[test]
    fn test_collect_tokens_rejects_unmatched_quote() {
        let args = delegate_args(Some("\"Count=5"), &[]);
        let err = collect_tokens(&args).unwrap_err();
        assert!(err.to_string().contains("failed to parse command line"));
    }

    #[cfg(unix)]
    #[test]
    fn test_cmd_delegate_propagates_failure_on_request() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let program = temp_dir.path().join("stamp");
        std::fs::write(&program, "#!/bin/sh\nexit 2\n").unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut args = delegate_args(None, &[]);
        args.program = program.clone();
        assert!(cmd_delegate(args).is_ok());

        let mut args = delegate_args(None, &[]);
        args.program = program;
        args.propagate_exit = true;
        let err = cmd_delegate(args).unwrap_err();
        assert!(matches!(
            err,
            TaskerError::ChildFailed {
                exit_code: Some(2),
                ..
            }
        ));
    }
}
