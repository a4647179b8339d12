use crate::logger::global;
use std::process::ExitCode;

/// Prints the flag bitset as a number followed by the set flag names,
/// e.g. `3 DEBUG | USE_COLORS`.
#[must_use]
pub fn cmd_flags() -> ExitCode {
    let flags = global::get_flags();
    let names: Vec<&str> = flags.iter_names().map(|(name, _)| name).collect();
    if names.is_empty() {
        println!("{}", flags.bits());
    } else {
        println!("{} {}", flags.bits(), names.join(" | "));
    }
    ExitCode::SUCCESS
}
