//! Implementation of the `tasker tokens` command.
//!
//! Decodes arguments exactly as a task binary would, without needing the
//! task type: property names are reported, not checked.

use crate::cli::TokensArgs;
use tasker::Result;
use tasker::args::{split_token, strip_quotes};

/// How one argument decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Assignment { name: String, value: String },
    Ignored { reason: &'static str },
}

/// Execute the `tasker tokens` command.
pub fn cmd_tokens(args: TokensArgs) -> Result<()> {
    for arg in &args.args {
        println!("{}", render_line(arg, &decode(arg)));
    }
    Ok(())
}

pub fn decode(arg: &str) -> Decoded {
    match split_token(arg) {
        Some(("", _)) => Decoded::Ignored {
            reason: "empty property name",
        },
        Some((name, value)) => Decoded::Assignment {
            name: name.to_string(),
            value: value.to_string(),
        },
        None if strip_quotes(arg).is_empty() => Decoded::Ignored {
            reason: "empty argument",
        },
        None => Decoded::Ignored { reason: "no '='" },
    }
}

pub fn render_line(arg: &str, decoded: &Decoded) -> String {
    match decoded {
        Decoded::Assignment { name, value } => format!("{} -> {} = {:?}", arg, name, value),
        Decoded::Ignored { reason } => format!("{} -> ignored ({})", arg, reason),
    }
}
