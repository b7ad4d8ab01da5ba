//! Error types for tasker.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so
//! task binaries can report failures the same way regardless of where they
//! came from.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tasker operations.
#[derive(Error, Debug)]
pub enum TaskerError {
    /// A known property was given a value its type cannot parse.
    #[error("invalid value '{value}' for property '{property}': {reason}")]
    InvalidValue {
        property: String,
        value: String,
        reason: String,
    },

    /// The task's own logic failed.
    #[error("task failed: {0:#}")]
    Task(#[source] anyhow::Error),

    /// The wrapped executable could not be started.
    #[error("failed to start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or waiting on the wrapped executable failed.
    #[error("{0}")]
    Io(String),

    /// The wrapped executable exited unsuccessfully.
    #[error("'{}' exited with {}", .program.display(), describe_exit(.exit_code))]
    ChildFailed {
        program: PathBuf,
        exit_code: Option<i32>,
    },

    /// Delegation was required but no wrapped executable exists.
    #[error("no wrapped executable found at '{}'", .0.display())]
    SiblingMissing(PathBuf),

    /// Delegation was required but the component has no extension to strip.
    #[error(
        "component '{}' has no extension, so it cannot have a wrapped executable",
        .0.display()
    )]
    NoSiblingName(PathBuf),

    /// Configuration could not be read or is invalid.
    #[error("{0}")]
    Config(String),
}

impl TaskerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskerError::InvalidValue { .. } => exit_codes::INVALID_VALUE,
            TaskerError::Task(_) => exit_codes::TASK_FAILURE,
            TaskerError::Spawn { .. } | TaskerError::Io(_) => exit_codes::SPAWN_FAILURE,
            TaskerError::ChildFailed { .. } => exit_codes::CHILD_FAILURE,
            TaskerError::SiblingMissing(_)
            | TaskerError::NoSiblingName(_)
            | TaskerError::Config(_) => exit_codes::CONFIG_ERROR,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type alias for tasker operations.
pub type Result<T> = std::result::Result<T, TaskerError>;
