//! The process-wide logger.
//!
//! One [`Logger`] sits behind a single mutex, so every configuration call and every
//! emission (set level, render, write) is one critical section. It is created lazily
//! with [`DEFAULT_NAME`] on first use; [`init`] replaces it with a fresh instance.
//!
//! Failures of the macro entry points go through the installed [`ErrorPolicy`];
//! [`try_emit`] hands the `Result` back instead.

use super::{DEFAULT_NAME, Destination, Flags, Logger};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fmt::{CallSite, Clock};
use crate::internal;
use crate::level::Level;
use crate::output::{Console, FileMode, Sink};
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// What the macro entry points do when an emission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorPolicy {
    /// Report on stderr, then terminate with exit code 1.
    #[default]
    Exit,
    /// Report on stderr and carry on; the failed record is dropped.
    Report,
}

impl ErrorPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Report => "report",
        }
    }

    /// Reports `error` unless the logger already did, then applies the policy.
    pub fn handle(self, error: &Error) {
        if !error.is_reported() {
            internal::fatal("POLICY", &error.to_string());
        }
        if self == Self::Exit {
            std::process::exit(1);
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exit" | "fatal" => Ok(Self::Exit),
            "report" | "continue" => Ok(Self::Report),
            _ => Err(format!("unknown error policy: '{s}'")),
        }
    }
}

struct State {
    logger: Logger,
    policy: ErrorPolicy,
}

static STATE: OnceLock<Mutex<State>> = OnceLock::new();

fn state() -> MutexGuard<'static, State> {
    STATE
        .get_or_init(|| {
            Mutex::new(State {
                logger: Logger::new(DEFAULT_NAME),
                policy: ErrorPolicy::default(),
            })
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the global logger with a fresh one named `name` and resets the policy.
pub fn init(name: impl Into<String>) {
    let logger = Logger::new(name);
    let mut state = state();
    state.logger = logger;
    state.policy = ErrorPolicy::default();
}

/// Replaces the global logger with one built from `config`.
pub fn init_with_config(config: &Config) {
    let logger = Logger::from_config(config);
    let policy = config.parse_policy();
    let mut state = state();
    state.logger = logger;
    state.policy = policy;
}

/// Runs `f` with exclusive access to the global logger.
pub fn with<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut state().logger)
}

pub fn set_level(level: Level) {
    state().logger.set_level(level);
}

#[must_use]
pub fn level() -> Level {
    state().logger.level()
}

pub fn set_pattern(pattern: impl Into<String>) {
    state().logger.set_pattern(pattern);
}

#[must_use]
pub fn pattern() -> String {
    state().logger.pattern().to_string()
}

pub fn set_output_stream(sink: impl Into<Sink>) {
    state().logger.set_output_stream(sink);
}

pub fn set_console(console: Console) {
    state().logger.set_console(console);
}

/// # Errors
/// [`Error::OpenFile`] when the file cannot be opened.
pub fn open_file(path: impl AsRef<Path>) -> Result<()> {
    state().logger.open_file(path.as_ref())
}

/// # Errors
/// The flush error of the closed sink.
pub fn close_stream() -> Result<()> {
    state().logger.close_stream()
}

/// # Errors
/// Any error from truncating the file.
pub fn clear_file(path: impl AsRef<Path>) -> Result<()> {
    state().logger.clear_file(path.as_ref())
}

#[must_use]
pub fn get_flags() -> Flags {
    state().logger.flags()
}

pub fn set_flags(mask: Flags) {
    state().logger.set_flags(mask);
}

pub fn unset_flags(mask: Flags) {
    state().logger.unset_flags(mask);
}

pub fn flip_flags(mask: Flags) {
    state().logger.flip_flags(mask);
}

pub fn set_file_write_mode(mode: FileMode) {
    state().logger.set_file_write_mode(mode);
}

pub fn set_clock(clock: impl Clock + 'static) {
    state().logger.set_clock(clock);
}

#[must_use]
pub fn error_policy() -> ErrorPolicy {
    state().policy
}

pub fn set_error_policy(policy: ErrorPolicy) {
    state().policy = policy;
}

/// One emission through the global logger, returning any failure to the caller.
///
/// The message is formatted before the lock is taken, so a `Display` impl may log too.
///
/// # Errors
/// See [`Logger::log`].
pub fn try_emit(
    level: Level,
    destination: Destination<'_>,
    site: CallSite,
    args: fmt::Arguments<'_>,
) -> Result<()> {
    let body = format_body(args)?;
    state()
        .logger
        .log(level, destination, site, format_args!("{body}"))
}

/// One emission through the global logger; failures go to the installed policy.
/// This is what the logging macros expand to.
pub fn emit(level: Level, destination: Destination<'_>, site: CallSite, args: fmt::Arguments<'_>) {
    let (result, policy) = match format_body(args) {
        Ok(body) => {
            let mut state = state();
            let result = state
                .logger
                .log(level, destination, site, format_args!("{body}"));
            (result, state.policy)
        }
        Err(error) => (Err(error), error_policy()),
    };
    if let Err(error) = result {
        policy.handle(&error);
    }
}

fn format_body(args: fmt::Arguments<'_>) -> Result<String> {
    let mut body = String::new();
    fmt::Write::write_fmt(&mut body, args)
        .map_err(|_| io::Error::other("a formatting trait implementation returned an error"))?;
    Ok(body)
}
