//! A minimal task that writes a message to its log.
//!
//! Built as the `echo-task` binary it doubles as a wrapped executable for
//! trying out delegation: copy or link it next to a component named
//! `echo-task.<ext>` and the host entry will run it instead.

use crate::log::TaskLog;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct EchoTask {
    pub message: String,
    pub repeat: u32,
    pub uppercase: bool,
    /// Fail after writing, to exercise error reporting.
    pub fail: bool,
}

impl Default for EchoTask {
    fn default() -> Self {
        Self {
            message: "hello".to_string(),
            repeat: 1,
            uppercase: false,
            fail: false,
        }
    }
}

crate::properties!(EchoTask {
    "Message" => message,
    "Repeat" => repeat,
    "Uppercase" => uppercase,
    "Fail" => fail,
});

impl Task for EchoTask {
    fn run(&mut self, log: &dyn TaskLog) -> anyhow::Result<()> {
        let line = if self.uppercase {
            self.message.to_uppercase()
        } else {
            self.message.clone()
        };

        for _ in 0..self.repeat {
            log.write(&line);
        }

        if self.fail {
            anyhow::bail!("echo failed on request after {} line(s)", self.repeat);
        }
        Ok(())
    }
}
