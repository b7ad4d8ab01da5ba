//! `Name=Value` argument codec.
//!
//! Serializes a task's properties into command-line tokens for a wrapped
//! executable, and applies such tokens back onto a task instance. Decoding
//! is permissive: tokens without `=` and tokens naming unknown properties are
//! skipped, so a host and a wrapped executable built from different versions
//! of a task can still talk to each other.

use crate::error::{Result, TaskerError};
use crate::property::Properties;

/// Render every property of `task` as a `Name=Value` token, in declaration order.
///
/// Values are not escaped; a value containing `"` will not survive the
/// quoted single-string form produced by [`to_command_line`].
pub fn to_tokens<T: Properties>(task: &T) -> Vec<String> {
    T::properties()
        .iter()
        .map(|p| format!("{}={}", p.name(), p.get(task)))
        .collect()
}

/// Render every property as one command-line string: each token wrapped in
/// double quotes and preceded by a space, e.g. ` "Count=5" "Label=hello"`.
pub fn to_command_line<T: Properties>(task: &T) -> String {
    quote_tokens(&to_tokens(task))
}

/// Join already rendered tokens into the quoted single-string form.
pub fn quote_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| format!(" \"{}\"", t.as_ref()))
        .collect()
}

/// Remove one pair of surrounding double quotes, if present.
pub fn strip_quotes(arg: &str) -> &str {
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        &arg[1..arg.len() - 1]
    } else {
        arg
    }
}

/// Split a raw argument into `(name, value)`.
///
/// Returns `None` if the argument has no `=`. Only the first `=` splits; the
/// value keeps any further ones.
pub fn split_token(arg: &str) -> Option<(&str, &str)> {
    strip_quotes(arg).split_once('=')
}

/// What happened to each argument passed to [`apply_args`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Names of the properties that were assigned, in argument order.
    pub applied: Vec<String>,
    /// Raw arguments that were skipped (no `=`, or unknown name).
    pub ignored: Vec<String>,
}

/// Apply `Name=Value` arguments to `task`.
///
/// Unknown names and malformed arguments are skipped. A value that the
/// property cannot parse stops processing and is returned as
/// [`TaskerError::InvalidValue`]; arguments before it stay applied.
pub fn apply_args<T, I, S>(task: &mut T, args: I) -> Result<ApplyReport>
where
    T: Properties,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ApplyReport::default();

    for arg in args {
        let arg = arg.as_ref();

        let Some((name, value)) = split_token(arg) else {
            tracing::debug!(argument = arg, "ignoring argument without '='");
            report.ignored.push(arg.to_string());
            continue;
        };

        let Some(property) = T::property(name) else {
            tracing::debug!(property = name, "ignoring unknown property");
            report.ignored.push(arg.to_string());
            continue;
        };

        property
            .set(task, value)
            .map_err(|reason| TaskerError::InvalidValue {
                property: name.to_string(),
                value: value.to_string(),
                reason,
            })?;
        report.applied.push(name.to_string());
    }

    Ok(report)
}
