//! Entry points.
//!
//! A task is started one of two ways:
//!
//! - **By a host** ([`execute`]): the host constructs the task, sets its
//!   properties, and calls in once per build step. If a wrapped executable
//!   sits next to the component the task is delegated to it; otherwise `run`
//!   is called directly.
//! - **As a program** ([`main_with`] / [`run_with_args`]): the process
//!   arguments are applied as `Name=Value` properties and `run` is called.
//!   This is what the wrapped executable itself does.

use crate::args::{apply_args, to_tokens};
use crate::config::{ExitPolicy, TaskerConfig};
use crate::dispatch::{ChildOutcome, ExecutionMode, ModeStrategy, run_delegated, strategy_for};
use crate::error::{Result, TaskerError};
use crate::exit_codes;
use crate::log::{ConsoleLog, HostLog, TaskLog, init_tracing};
use crate::sibling::current_component;
use crate::task::Task;
use std::path::Path;
use std::process::ExitCode;

/// What a host-invoked execution ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `run` was called in this process and returned `Ok`.
    InProcess,
    /// A wrapped executable ran to completion.
    Delegated(ChildOutcome),
}

/// Host entry point for a task loaded from `component`.
///
/// Loads `tasker.yaml` from the component's directory, logs through
/// [`HostLog`], and picks the execution mode from the configured delegation.
/// A non-zero exit of the wrapped executable is only an error under
/// `exit_policy: propagate`.
pub fn execute<T: Task>(task: &mut T, component: &Path) -> Result<Outcome> {
    let config = TaskerConfig::discover(component)?;
    let strategy = strategy_for(&config, component);
    execute_with(task, strategy.as_ref(), &HostLog, config.exit_policy)
}

/// Host entry point for a task linked into the running executable.
///
/// The component is the executable itself, so a wrapped executable is
/// looked for next to it.
pub fn execute_current<T: Task>(task: &mut T) -> Result<Outcome> {
    let component = current_component()?;
    execute(task, &component)
}

/// Host entry point with the strategy, log and exit policy supplied by the caller.
pub fn execute_with<T: Task>(
    task: &mut T,
    strategy: &dyn ModeStrategy,
    log: &dyn TaskLog,
    exit_policy: ExitPolicy,
) -> Result<Outcome> {
    match strategy.resolve()? {
        ExecutionMode::InProcess => {
            tracing::debug!("running task in-process");
            task.run(log).map_err(TaskerError::Task)?;
            Ok(Outcome::InProcess)
        }
        ExecutionMode::Delegated { program } => {
            let tokens = to_tokens(task);
            let child = run_delegated(&program, &tokens, log)?;

            if !child.is_success() && exit_policy == ExitPolicy::Propagate {
                return Err(TaskerError::ChildFailed {
                    program,
                    exit_code: child.exit_code,
                });
            }

            Ok(Outcome::Delegated(child))
        }
    }
}

/// Command-line entry point: apply `args` to `task`, then run it.
///
/// `args` must not include the program name.
pub fn run_with_args<T, I, S>(task: &mut T, args: I, log: &dyn TaskLog) -> Result<()>
where
    T: Task,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let report = apply_args(task, args)?;
    tracing::debug!(
        applied = report.applied.len(),
        ignored = report.ignored.len(),
        "applied command-line properties"
    );

    task.run(log).map_err(TaskerError::Task)
}

/// Complete `main` for a task binary.
///
/// The tracing level comes from `TASKER_LOG`, else from `log_level` in a
/// `tasker.yaml` beside the executable.
///
/// ```no_run
/// # #[derive(Default)] struct Stamp { count: u32 }
/// # tasker::properties!(Stamp { "Count" => count });
/// # impl tasker::Task for Stamp {
/// #     fn run(&mut self, _log: &dyn tasker::TaskLog) -> anyhow::Result<()> { Ok(()) }
/// # }
/// fn main() -> std::process::ExitCode {
///     tasker::main_with::<Stamp>()
/// }
/// ```
pub fn main_with<T: Task + Default>() -> ExitCode {
    // A broken config is reported by the host side; here it only sets the level.
    let level = current_component()
        .and_then(|component| TaskerConfig::discover(&component))
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    init_tracing(&level);

    let mut task = T::default();
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    match run_with_args(&mut task, args, &ConsoleLog) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
