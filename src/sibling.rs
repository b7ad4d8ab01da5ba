//! Wrapped executable lookup.
//!
//! A component built as `stamp.task` may ship with a plain `stamp`
//! executable in the same directory. When it does, the host entry runs that
//! executable instead of the in-process logic, which makes the task
//! debuggable as an ordinary program.

use crate::error::{Result, TaskerError};
use std::path::{Path, PathBuf};

/// The path a wrapped executable for `component` would have: same directory,
/// file stem without extension.
///
/// Returns `None` when the component has no file name, or when stripping the
/// extension changes nothing (the component would wrap itself).
pub fn sibling_path(component: &Path) -> Option<PathBuf> {
    let stem = component.file_stem()?;
    let candidate = component.with_file_name(stem);
    if candidate == component {
        return None;
    }
    Some(candidate)
}

/// The wrapped executable for `component`, if one exists on disk.
pub fn find_sibling(component: &Path) -> Option<PathBuf> {
    let candidate = sibling_path(component)?;
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "found wrapped executable");
        Some(candidate)
    } else {
        tracing::debug!(path = %candidate.display(), "no wrapped executable");
        None
    }
}

/// Path of the running executable.
pub fn current_component() -> Result<PathBuf> {
    std::env::current_exe().map_err(|e| {
        TaskerError::Config(format!("failed to determine current executable: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sibling_path_strips_extension() {
        let path = sibling_path(Path::new("/opt/tasks/stamp.task")).unwrap();
        assert_eq!(path, Path::new("/opt/tasks/stamp"));
    }

    #[test]
    fn test_sibling_path_strips_only_last_extension() {
        let path = sibling_path(Path::new("/opt/tasks/stamp.build.dll")).unwrap();
        assert_eq!(path, Path::new("/opt/tasks/stamp.build"));
    }

    #[test]
    fn test_sibling_path_relative_component() {
        let path = sibling_path(Path::new("stamp.task")).unwrap();
        assert_eq!(path, Path::new("stamp"));
    }

    #[test]
    fn test_sibling_path_without_extension_is_none() {
        assert_eq!(sibling_path(Path::new("/opt/tasks/stamp")), None);
    }

    #[test]
    fn test_sibling_path_without_file_name_is_none() {
        assert_eq!(sibling_path(Path::new("/")), None);
    }

    #[test]
    fn test_find_sibling_present() {
        let temp_dir = TempDir::new().unwrap();
        let component = temp_dir.path().join("stamp.task");
        let wrapped = temp_dir.path().join("stamp");
        std::fs::write(&component, b"").unwrap();
        std::fs::write(&wrapped, b"").unwrap();

        assert_eq!(find_sibling(&component), Some(wrapped));
    }

    #[test]
    fn test_find_sibling_absent() {
        let temp_dir = TempDir::new().unwrap();
        let component = temp_dir.path().join("stamp.task");
        std::fs::write(&component, b"").unwrap();

        assert_eq!(find_sibling(&component), None);
    }

    #[test]
    fn test_find_sibling_ignores_directories() {
        let temp_dir = TempDir::new().unwrap();
        let component = temp_dir.path().join("stamp.task");
        std::fs::create_dir(temp_dir.path().join("stamp")).unwrap();

        assert_eq!(find_sibling(&component), None);
    }

    #[test]
    fn test_current_component_exists() {
        let path = current_component().unwrap();
        assert!(path.exists());
    }
}
