//! `echo-task`: the sample task as a standalone program.
//!
//! Usage: `echo-task [Message=<text>] [Repeat=<n>] [Uppercase=<bool>] [Fail=<bool>]`

use std::process::ExitCode;
use tasker::echo::EchoTask;

fn main() -> ExitCode {
    tasker::main_with::<EchoTask>()
}
