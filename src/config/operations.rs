//! Config loading, validation, and discovery.

use super::model::TaskerConfig;
use super::types::CONFIG_FILE_NAME;
use crate::error::{Result, TaskerError};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

impl TaskerConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskerError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: TaskerConfig = serde_yaml::from_str(yaml)
            .map_err(|e| TaskerError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| TaskerError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `log_level` must be a valid `tracing` filter directive
    /// - `sibling`, when set, must not be empty
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            return Err(TaskerError::Config(format!(
                "config validation failed: invalid log_level '{}': {}",
                self.log_level, e
            )));
        }

        if let Some(sibling) = &self.sibling {
            if sibling.as_os_str().is_empty() {
                return Err(TaskerError::Config(
                    "config validation failed: sibling must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Find and load the config that applies to `component`.
    ///
    /// Looks for `tasker.yaml` in the component's directory. A missing file
    /// yields defaults; an unreadable or invalid one is an error.
    pub fn discover(component: &Path) -> Result<Self> {
        let Some(path) = Self::path_for(component) else {
            return Ok(Self::default());
        };

        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading config");
        Self::load(&path)
    }

    /// Path of the config file for `component`, if the component has a directory.
    pub fn path_for(component: &Path) -> Option<PathBuf> {
        component.parent().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// The configured sibling override, resolved against the component's directory.
    pub fn sibling_for(&self, component: &Path) -> Option<PathBuf> {
        let sibling = self.sibling.as_ref()?;
        if sibling.is_absolute() {
            return Some(sibling.clone());
        }
        Some(match component.parent() {
            Some(dir) => dir.join(sibling),
            None => sibling.clone(),
        })
    }
}
