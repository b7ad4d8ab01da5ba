//! TaskerConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Adapter configuration.
///
/// This struct represents the contents of an optional `tasker.yaml` placed
/// next to a task component. Unknown fields in the YAML are ignored for
/// forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskerConfig {
    /// How to choose between in-process and delegated execution.
    pub delegation: Delegation,

    /// What a non-zero exit from the wrapped executable means.
    pub exit_policy: ExitPolicy,

    /// Explicit wrapped executable, used instead of the file-stem sibling.
    /// Relative paths are resolved against the component's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sibling: Option<PathBuf>,

    /// Default `tracing` filter when `TASKER_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TaskerConfig {
    fn default() -> Self {
        Self {
            delegation: Delegation::default(),
            exit_policy: ExitPolicy::default(),
            sibling: None,
            log_level: default_log_level(),
        }
    }
}
