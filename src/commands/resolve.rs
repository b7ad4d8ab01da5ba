//! Implementation of the `tasker resolve` command.
//!
//! Shows what the host entry would do with a component: which config
//! applies, where the wrapped executable would be, and the resulting mode.

use crate::cli::ResolveArgs;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tasker::Result;
use tasker::config::{Delegation, ExitPolicy, TaskerConfig};
use tasker::dispatch::{ExecutionMode, strategy_for};
use tasker::sibling::sibling_path;

/// Everything `resolve` reports about a component.
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub component: PathBuf,
    /// Config file that was loaded, if any.
    pub config: Option<PathBuf>,
    pub delegation: Delegation,
    pub exit_policy: ExitPolicy,
    /// Where the wrapped executable is expected.
    pub expected: Option<PathBuf>,
    /// Wrapped executable that would run, or `None` for in-process.
    pub program: Option<PathBuf>,
}

/// Execute the `tasker resolve` command.
pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let resolution = resolve(&args.component)?;

    if args.json {
        let json = serde_json::to_string_pretty(&resolution).map_err(|e| {
            tasker::TaskerError::Io(format!("failed to serialize resolution: {}", e))
        })?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&resolution));
    }

    Ok(())
}

/// Resolve `component` the way the host entry does.
pub fn resolve(component: &Path) -> Result<Resolution> {
    let config = TaskerConfig::discover(component)?;
    let config_path = TaskerConfig::path_for(component).filter(|p| p.is_file());
    let expected = config
        .sibling_for(component)
        .or_else(|| sibling_path(component));

    let program = match strategy_for(&config, component).resolve()? {
        ExecutionMode::InProcess => None,
        ExecutionMode::Delegated { program } => Some(program),
    };

    Ok(Resolution {
        component: component.to_path_buf(),
        config: config_path,
        delegation: config.delegation,
        exit_policy: config.exit_policy,
        expected,
        program,
    })
}

/// Human-readable form of a resolution.
pub fn render_text(resolution: &Resolution) -> String {
    let display = |path: &Option<PathBuf>, none: &str| match path {
        Some(path) => path.display().to_string(),
        None => none.to_string(),
    };

    let mode = match &resolution.program {
        Some(program) => format!("delegated -> {}", program.display()),
        None => "in-process".to_string(),
    };

    format!(
        "component:   {}\n\
         config:      {}\n\
         delegation:  {:?}\n\
         exit policy: {:?}\n\
         sibling:     {}\n\
         mode:        {}\n",
        resolution.component.display(),
        display(&resolution.config, "(defaults)"),
        resolution.delegation,
        resolution.exit_policy,
        display(&resolution.expected, "(none)"),
        mode,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn component(temp_dir: &TempDir) -> PathBuf {
        let path = temp_dir.path().join("stamp.task");
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_resolve_in_process_without_sibling() {
        let temp_dir = TempDir::new().unwrap();
        let component = component(&temp_dir);

        let resolution = resolve(&component).unwrap();

        assert_eq!(resolution.program, None);
        assert_eq!(resolution.config, None);
        assert_eq!(resolution.expected, Some(temp_dir.path().join("stamp")));
        assert!(render_text(&resolution).contains("mode:        in-process"));
    }

    #[test]
    fn test_resolve_delegated_with_sibling() {
        let temp_dir = TempDir::new().unwrap();
        let component = component(&temp_dir);
        let wrapped = temp_dir.path().join("stamp");
        std::fs::write(&wrapped, b"").unwrap();

        let resolution = resolve(&component).unwrap();

        assert_eq!(resolution.program, Some(wrapped.clone()));
        assert!(render_text(&resolution).contains(&format!("delegated -> {}", wrapped.display())));
    }

    #[test]
    fn test_resolve_reports_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let component = component(&temp_dir);
        let config = temp_dir.path().join("tasker.yaml");
        std::fs::write(&config, "exit_policy: propagate\n").unwrap();

        let resolution = resolve(&component).unwrap();

        assert_eq!(resolution.config, Some(config));
        assert_eq!(resolution.exit_policy, ExitPolicy::Propagate);
    }

    #[test]
    fn test_resolve_always_without_sibling_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let component = component(&temp_dir);
        std::fs::write(temp_dir.path().join("tasker.yaml"), "delegation: always\n").unwrap();

        assert!(resolve(&component).is_err());
    }

    #[test]
    fn test_resolution_serializes_to_json() {
        let temp_dir = TempDir::new().unwrap();
        let component = component(&temp_dir);

        let resolution = resolve(&component).unwrap();
        let json = serde_json::to_value(&resolution).unwrap();

        assert_eq!(json["delegation"], "auto");
        assert_eq!(json["exit_policy"], "ignore");
        assert!(json["program"].is_null());
    }
}
