use super::fail;
use crate::internal;
use crate::logger::global;
use std::path::Path;
use std::process::ExitCode;

/// Truncates `path`, creating it when missing.
#[must_use]
pub fn cmd_clear(path: &Path) -> ExitCode {
    match global::clear_file(path) {
        Ok(()) => {
            internal::debug("CLI", &format!("Cleared {}", path.display()));
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}
