//! One file per subcommand; each handler reports its own failures through
//! [`internal`](crate::internal) and maps them to an exit code.

mod clear;
mod flags;
mod log;

pub use clear::cmd_clear;
pub use flags::cmd_flags;
pub use log::cmd_log;

use crate::error::Error;
use crate::internal;
use std::process::ExitCode;

/// An open failure was already reported by the logger itself.
fn fail(error: &Error) -> ExitCode {
    if !error.is_reported() {
        internal::error("CLI", &error.to_string());
    }
    ExitCode::FAILURE
}
