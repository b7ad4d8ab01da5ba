//! CLI argument parsing for the `tasker` tool.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tasker: inspect and exercise task delegation.
///
/// A task component can ship with a wrapped executable of the same base name.
/// These commands show what a host would do with such a component, and run
/// wrapped executables the way a host does.
#[derive(Parser, Debug)]
#[command(name = "tasker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log resolution details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tasker.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which executable a host would delegate a component to.
    ///
    /// Reads `tasker.yaml` beside the component, looks for the wrapped
    /// executable, and prints the resulting execution mode.
    Resolve(ResolveArgs),

    /// Show how `Name=Value` arguments decode.
    ///
    /// Each argument is reported with its name and value, or the reason it
    /// would be ignored.
    Tokens(TokensArgs),

    /// Run a wrapped executable the way a host would.
    ///
    /// The program's stdout is forwarded line by line; its exit status is
    /// reported afterwards.
    Delegate(DelegateArgs),
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Path of the task component (e.g., build/stamp.task).
    pub component: PathBuf,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `tokens` command.
#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Arguments to decode.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `delegate` command.
#[derive(Parser, Debug)]
pub struct DelegateArgs {
    /// Program to run.
    pub program: PathBuf,

    /// All arguments as one string, e.g. ` "Count=5" "Label=hello"`.
    #[arg(long, conflicts_with = "tokens")]
    pub command_line: Option<String>,

    /// Exit unsuccessfully when the program does.
    #[arg(long)]
    pub propagate_exit: bool,

    /// `Name=Value` arguments passed to the program.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve() {
        let cli = Cli::try_parse_from(["tasker", "resolve", "build/stamp.task"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.component, PathBuf::from("build/stamp.task"));
            assert!(!args.json);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn parse_resolve_json() {
        let cli = Cli::try_parse_from(["tasker", "resolve", "stamp.task", "--json"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn parse_tokens() {
        let cli =
            Cli::try_parse_from(["tasker", "tokens", "Count=5", "\"Label=x\"", "stray"]).unwrap();
        if let Command::Tokens(args) = cli.command {
            assert_eq!(args.args, ["Count=5", "\"Label=x\"", "stray"]);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn parse_delegate_with_tokens() {
        let cli = Cli::try_parse_from([
            "tasker",
            "delegate",
            "--propagate-exit",
            "./stamp",
            "Count=5",
            "Label=hello",
        ])
        .unwrap();
        if let Command::Delegate(args) = cli.command {
            assert_eq!(args.program, PathBuf::from("./stamp"));
            assert!(args.propagate_exit);
            assert_eq!(args.command_line, None);
            assert_eq!(args.tokens, ["Count=5", "Label=hello"]);
        } else {
            panic!("Expected Delegate command");
        }
    }

    #[test]
    fn parse_delegate_with_command_line() {
        let cli = Cli::try_parse_from([
            "tasker",
            "delegate",
            "./stamp",
            "--command-line",
            " \"Count=5\" \"Label=hello\"",
        ])
        .unwrap();
        if let Command::Delegate(args) = cli.command {
            assert_eq!(
                args.command_line.as_deref(),
                Some(" \"Count=5\" \"Label=hello\"")
            );
            assert!(args.tokens.is_empty());
        } else {
            panic!("Expected Delegate command");
        }
    }

    #[test]
    fn parse_delegate_rejects_both_forms() {
        let result = Cli::try_parse_from([
            "tasker",
            "delegate",
            "./stamp",
            "--command-line",
            "\"Count=5\"",
            "Label=hello",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_verbose() {
        let cli = Cli::try_parse_from(["tasker", "-v", "tokens", "A=1"]).unwrap();
        assert!(cli.verbose);
    }
}
