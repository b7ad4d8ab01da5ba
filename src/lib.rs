//! Tasker: run one build task as a host plugin or as a standalone executable.
//!
//! A task declares its configuration with [`properties!`] and its logic with
//! [`Task::run`]. Hosts call [`execute`]; task binaries call [`main_with`].
//! Between the two sits the argument codec, which turns the task's properties
//! into `Name=Value` arguments and back, so a host can hand the task to a
//! wrapped executable and a debugger can be attached to that process.

pub mod args;
pub mod config;
pub mod dispatch;
pub mod echo;
pub mod entry;
pub mod error;
pub mod exit_codes;
pub mod log;
pub mod property;
pub mod sibling;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;

pub use entry::{Outcome, execute, execute_current, execute_with, main_with, run_with_args};
pub use error::{Result, TaskerError};
pub use log::{CaptureLog, ConsoleLog, HostLog, TaskLog};
pub use property::{Properties, Property, PropertyValue};
pub use task::Task;
