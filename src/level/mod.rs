//! Severity levels with their tag strings and colors.
//!
//! The declaration order (`Info < Debug < Trace < Warning < Error < Fatal`) is part of the
//! external contract and is not a ranking of importance.

use crate::fmt::AnsiColor;
use std::fmt;
use std::str::FromStr;

/// Urgency of a log message. `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Normal operational messages.
    #[default]
    Info = 0,
    /// Development diagnostics, hidden unless the `DEBUG` flag is set.
    Debug = 1,
    /// Fine-grained tracing.
    Trace = 2,
    Warning = 3,
    Error = 4,
    /// Unrecoverable conditions. Logging at this level does not terminate the process.
    Fatal = 5,
}

const TAGS: [&str; 6] = ["INFO", "DEBUG", "TRACE", "WARNING", "ERROR", "FATAL"];

const COLORS: [AnsiColor; 6] = [
    AnsiColor::Green,
    AnsiColor::Yellow,
    AnsiColor::Cyan,
    AnsiColor::Yellow,
    AnsiColor::Red,
    AnsiColor::Red,
];

impl Level {
    /// Text rendered inside the brackets of `{t}`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        TAGS[self as usize]
    }

    /// Color applied to `{t}` when colors are enabled.
    #[must_use]
    pub const fn color(self) -> AnsiColor {
        COLORS[self as usize]
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Every level in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::Warning,
            Self::Error,
            Self::Fatal,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
