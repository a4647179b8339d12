//! zlog's own diagnostic logger, used for config loading and for reporting failures
//! of the global logger.
//!
//! It is a separate [`Logger`] behind its own mutex, so a diagnostic can be written
//! while the global logger's lock is held elsewhere. Created with defaults on first
//! use; [`init_with_config`] replaces it.

use crate::config::Config;
use crate::fmt::CallSite;
use crate::level::Level;
use crate::logger::{Flags, Logger};
use crate::output::Sink;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// `{f}` carries the diagnostic scope (`CONFIG`, `CLI`, ...).
const INTERNAL_PATTERN: &str = "{n} | {t} {f} > ";

static INTERNAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Colors only when asked for and stderr is a terminal.
fn build_internal_logger(show_debug: bool, colors: bool) -> Logger {
    let mut flags = Flags::empty();
    flags.set(Flags::DEBUG, show_debug);
    flags.set(Flags::USE_COLORS, colors && Sink::Stderr.is_terminal());
    Logger::builder()
        .name("zlog")
        .pattern(INTERNAL_PATTERN)
        .flags(flags)
        .build()
}

fn logger() -> MutexGuard<'static, Logger> {
    INTERNAL_LOGGER
        .get_or_init(|| Mutex::new(build_internal_logger(false, true)))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Follows the config's `[flags]`: `debug` shows debug diagnostics, `colors = false`
/// keeps them plain.
pub fn init_with_config(config: &Config) {
    *logger() = build_internal_logger(config.flags.debug, config.flags.colors);
}

/// Writes on the installed stderr sink, so the color flag stays as configured.
#[track_caller]
fn log(level: Level, scope: &'static str, msg: &str) {
    let site = CallSite::caller(scope);
    let mut logger = logger();
    logger.set_level(level);
    // Nowhere left to report a failure of the reporter itself.
    let _ = logger.emit(site, format_args!("{msg}\n"));
}


/// Startup and config-loading details.
#[track_caller]
pub fn debug(scope: &'static str, msg: &str) {
    log(Level::Debug, scope, msg);
}

#[track_caller]
pub fn info(scope: &'static str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recoverable oddities, e.g. an unknown level string in config.
#[track_caller]
pub fn warning(scope: &'static str, msg: &str) {
    log(Level::Warning, scope, msg);
}

#[track_caller]
pub fn error(scope: &'static str, msg: &str) {
    log(Level::Error, scope, msg);
}

/// Failures the error policy acts on.
#[track_caller]
pub fn fatal(scope: &'static str, msg: &str) {
    log(Level::Fatal, scope, msg);
}
