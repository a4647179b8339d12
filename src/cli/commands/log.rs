//! Writes one record through the global logger.

use super::fail;
use crate::level::Level;
use crate::logger::{Destination, global};
use crate::output::FileMode;
use std::path::Path;
use std::process::ExitCode;

/// Logs `message` followed by a newline, to `file` when given and to stderr otherwise.
///
/// The console path emits on the already-initialized sink, so `--no-color` holds even
/// on a terminal.
#[must_use]
pub fn cmd_log(level: Level, message: &str, file: Option<&Path>, truncate: bool) -> ExitCode {
    let result = match file {
        Some(path) => {
            if truncate {
                global::set_file_write_mode(FileMode::Truncate);
            }
            global::try_emit(
                level,
                Destination::File(path),
                crate::call_site!(),
                format_args!("{message}\n"),
            )
        }
        None => global::with(|logger| {
            logger.set_level(level);
            logger.emit(crate::call_site!(), format_args!("{message}\n"))
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}
