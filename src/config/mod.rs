//! Adapter configuration for tasker.
//!
//! This module defines the TaskerConfig struct that represents an optional
//! `tasker.yaml` beside a task component. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::TaskerConfig;
pub use types::{CONFIG_FILE_NAME, Delegation, ExitPolicy};
