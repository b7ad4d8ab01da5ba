//! The task trait.

use crate::log::TaskLog;
use crate::property::Properties;

/// A unit of build work configured through its [`Properties`].
///
/// `run` is the task's own logic. It sees only its configured fields and the
/// log it was handed, and reports failure by returning an error.
pub trait Task: Properties {
    fn run(&mut self, log: &dyn TaskLog) -> anyhow::Result<()>;
}
