use crate::log::TaskLog;
use crate::property::Properties;
use crate::task::Task;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Task used across dispatcher tests: records its runs, can be told to fail.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct StampTask {
    pub(crate) count: i32,
    pub(crate) label: String,
    pub(crate) fail: bool,
    pub(crate) runs: u32,
}

crate::properties!(StampTask {
    "Count" => count,
    "Label" => label,
    "Fail" => fail,
});

impl Task for StampTask {
    fn run(&mut self, log: &dyn TaskLog) -> anyhow::Result<()> {
        self.runs += 1;
        if self.fail {
            anyhow::bail!("stamp asked to fail");
        }
        log.write(&format!("stamping {} x{}", self.label, self.count));
        Ok(())
    }
}

pub(crate) fn stamp(count: i32, label: &str) -> StampTask {
    StampTask {
        count,
        label: label.to_string(),
        ..Default::default()
    }
}

/// Tokens `task` would be delegated with.
pub(crate) fn tokens_of<T: Properties>(task: &T) -> Vec<String> {
    crate::args::to_tokens(task)
}

/// A temp directory holding `stamp.task`, the component a host would load.
pub(crate) fn component_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let component = temp_dir.path().join("stamp.task");
    std::fs::write(&component, b"component").unwrap();
    (temp_dir, component)
}

/// Write an executable `/bin/sh` script.
#[cfg(unix)]
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Script body that echoes each argument on its own line, then exits with `code`.
#[cfg(unix)]
pub(crate) fn echo_args_body(code: i32) -> String {
    format!("for arg in \"$@\"; do echo \"$arg\"; done\nexit {}", code)
}
