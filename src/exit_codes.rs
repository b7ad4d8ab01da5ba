//! Exit code constants for task binaries and the `tasker` tool.
//!
//! - 0: Success
//! - 1: A property value could not be parsed
//! - 2: The task's own logic failed
//! - 3: The wrapped executable could not be started or read
//! - 4: The wrapped executable exited unsuccessfully (propagate policy only)
//! - 5: Configuration error (bad `tasker.yaml`, missing sibling)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// A `Name=Value` argument named a known property but the value did not parse.
pub const INVALID_VALUE: i32 = 1;

/// The task's `run` returned an error.
pub const TASK_FAILURE: i32 = 2;

/// Spawning or reading the wrapped executable failed.
pub const SPAWN_FAILURE: i32 = 3;

/// The wrapped executable exited with a non-zero status.
pub const CHILD_FAILURE: i32 = 4;

/// Configuration could not be loaded, or required delegation was impossible.
pub const CONFIG_ERROR: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            INVALID_VALUE,
            TASK_FAILURE,
            SPAWN_FAILURE,
            CHILD_FAILURE,
            CONFIG_ERROR,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
