//! Execution mode selection and delegated execution.
//!
//! The host entry asks a [`ModeStrategy`] whether to run a task in-process
//! or to hand it to a wrapped executable. Delegated runs spawn the
//! executable with the task's `Name=Value` tokens and forward its stdout,
//! line by line, to the task log until the child exits.

use crate::config::{Delegation, TaskerConfig};
use crate::error::{Result, TaskerError};
use crate::log::TaskLog;
use crate::sibling::{find_sibling, sibling_path};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Where a task's logic runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Call the task's `run` in the current process.
    InProcess,
    /// Spawn `program` and forward its output.
    Delegated { program: PathBuf },
}

/// Decides the execution mode for one invocation.
pub trait ModeStrategy {
    fn resolve(&self) -> Result<ExecutionMode>;
}

/// Always returns the same mode.
#[derive(Debug, Clone)]
pub struct FixedMode(pub ExecutionMode);

impl ModeStrategy for FixedMode {
    fn resolve(&self) -> Result<ExecutionMode> {
        Ok(self.0.clone())
    }
}

/// Looks for a wrapped executable next to the component.
#[derive(Debug, Clone)]
pub struct SiblingProbe {
    component: PathBuf,
    /// Explicit executable to use instead of the file-stem sibling.
    override_path: Option<PathBuf>,
    /// Fail instead of falling back to in-process when nothing is found.
    required: bool,
}

impl SiblingProbe {
    pub fn new(component: impl Into<PathBuf>) -> Self {
        Self {
            component: component.into(),
            override_path: None,
            required: false,
        }
    }

    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    fn missing(&self) -> TaskerError {
        match self
            .override_path
            .clone()
            .or_else(|| sibling_path(&self.component))
        {
            Some(expected) => TaskerError::SiblingMissing(expected),
            None => TaskerError::NoSiblingName(self.component.clone()),
        }
    }
}

impl ModeStrategy for SiblingProbe {
    fn resolve(&self) -> Result<ExecutionMode> {
        let found = match &self.override_path {
            Some(path) if path.is_file() => Some(path.clone()),
            Some(_) => None,
            None => find_sibling(&self.component),
        };

        match found {
            Some(program) => Ok(ExecutionMode::Delegated { program }),
            None if self.required => Err(self.missing()),
            None => Ok(ExecutionMode::InProcess),
        }
    }
}

/// Build the strategy `config` asks for.
pub fn strategy_for(config: &TaskerConfig, component: &Path) -> Box<dyn ModeStrategy> {
    match config.delegation {
        Delegation::Never => Box::new(FixedMode(ExecutionMode::InProcess)),
        Delegation::Auto | Delegation::Always => Box::new(
            SiblingProbe::new(component)
                .with_override(config.sibling_for(component))
                .required(config.delegation == Delegation::Always),
        ),
    }
}

/// Result of a delegated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildOutcome {
    /// Exit code of the process (None if terminated by a signal).
    pub exit_code: Option<i32>,
    /// Number of stdout lines forwarded to the log.
    pub lines: usize,
}

impl ChildOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Spawn `program` with `tokens` as its arguments and forward its stdout to `log`.
///
/// No shell is involved; each token is one argv entry. stdin is closed right
/// away, stderr is inherited. Blocks until the child exits; there is no
/// timeout.
pub fn run_delegated<S: AsRef<str>>(
    program: &Path,
    tokens: &[S],
    log: &dyn TaskLog,
) -> Result<ChildOutcome> {
    tracing::debug!(
        program = %program.display(),
        args = %crate::args::quote_tokens(tokens),
        "starting wrapped executable"
    );

    let mut command = Command::new(program);
    for token in tokens {
        let token: &str = token.as_ref();
        command.arg(token);
    }
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let mut child = command.spawn().map_err(|e| TaskerError::Spawn {
        program: program.to_path_buf(),
        source: e,
    })?;

    drop(child.stdin.take());

    let lines = match forward_output(&mut child, log) {
        Ok(lines) => lines,
        Err(e) => {
            kill_process(&mut child);
            return Err(e);
        }
    };

    let status = child.wait().map_err(|e| {
        TaskerError::Io(format!("failed to wait for '{}': {}", program.display(), e))
    })?;

    let outcome = ChildOutcome {
        exit_code: status.code(),
        lines,
    };

    if outcome.is_success() {
        tracing::debug!(program = %program.display(), lines, "wrapped executable finished");
    } else {
        tracing::warn!(
            program = %program.display(),
            exit_code = ?outcome.exit_code,
            "wrapped executable exited unsuccessfully"
        );
    }

    Ok(outcome)
}

/// Read the child's stdout to EOF, writing each line to `log`.
fn forward_output(child: &mut Child, log: &dyn TaskLog) -> Result<usize> {
    let Some(stdout) = child.stdout.take() else {
        return Err(TaskerError::Io("wrapped executable has no stdout pipe".to_string()));
    };

    let mut reader = BufReader::new(stdout);
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
            TaskerError::Io(format!("failed to read wrapped executable output: {}", e))
        })?;
        if read == 0 {
            break;
        }

        log.write(&String::from_utf8_lossy(trim_line_ending(&buf)));
        count += 1;
    }

    Ok(count)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Kill a process and wait for it to terminate.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}
