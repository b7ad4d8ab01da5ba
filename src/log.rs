//! Task logging.
//!
//! Tasks write plain lines through [`TaskLog`]. Which implementation they get
//! depends on how they were started: under a host, lines become `tracing`
//! events the host's subscriber picks up; as a standalone program, lines go
//! to stdout, which is also the channel a host reads when it runs the program
//! as a wrapped executable.

use std::io::Write;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TASKER_LOG";

/// Target used for lines written through [`HostLog`].
pub const TASK_TARGET: &str = "tasker::task";

/// Accepts one line of task output.
pub trait TaskLog {
    fn write(&self, line: &str);
}

/// Lines are emitted as `info` events on the host's subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostLog;

impl TaskLog for HostLog {
    fn write(&self, line: &str) {
        tracing::info!(target: TASK_TARGET, "{}", line);
    }
}

/// Lines are written to stdout and flushed one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog;

impl TaskLog for ConsoleLog {
    fn write(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout means nobody is listening; nothing useful to do.
        let _ = writeln!(stdout, "{}", line).and_then(|_| stdout.flush());
    }
}

/// Lines are kept in memory.
#[derive(Debug, Default)]
pub struct CaptureLog {
    lines: Mutex<Vec<String>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl TaskLog for CaptureLog {
    fn write(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(line.to_string());
    }
}

impl<L: TaskLog + ?Sized> TaskLog for &L {
    fn write(&self, line: &str) {
        (**self).write(line)
    }
}

/// Install a stderr `tracing` subscriber for a binary.
///
/// The filter comes from `TASKER_LOG` when set, otherwise `default_level`.
/// Does nothing if a global subscriber is already installed, so a host that
/// set up its own logging keeps it.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
