//! Command implementations for tasker.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod delegate;
mod resolve;
mod tokens;

use crate::cli::Command;
use tasker::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Resolve(args) => resolve::cmd_resolve(args),
        Command::Tokens(args) => tokens::cmd_tokens(args),
        Command::Delegate(args) => delegate::cmd_delegate(args),
    }
}
