//! Configuration types and defaults for tasker.
//!
//! This module defines the enums and default value functions used by the
//! TaskerConfig struct.

use serde::{Deserialize, Serialize};

/// File name looked up next to a component.
pub const CONFIG_FILE_NAME: &str = "tasker.yaml";

/// How the host entry decides between in-process and delegated execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Delegation {
    /// Delegate when a wrapped executable exists, otherwise run in-process (default).
    #[default]
    Auto,
    /// Always run in-process, even if a wrapped executable exists.
    Never,
    /// Always delegate; a missing wrapped executable is an error.
    Always,
}

impl Delegation {
    /// Parse a delegation mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "never" => Some(Self::Never),
            "always" => Some(Self::Always),
            _ => None,
        }
    }
}

/// What a non-zero exit from the wrapped executable means to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Log a warning and report success (default).
    #[default]
    Ignore,
    /// Report the run as failed.
    Propagate,
}

impl ExitPolicy {
    /// Parse an exit policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ignore" => Some(Self::Ignore),
            "propagate" => Some(Self::Propagate),
            _ => None,
        }
    }
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}
