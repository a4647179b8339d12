//! Unified error type for all zlog operations.

use crate::fmt::PatternError;
use crate::level::ParseLevelError;
use crate::output::ParseFileModeError;
use std::path::PathBuf;

/// Error type for zlog operations.
#[derive(Debug)]
pub enum Error {
    /// The active pattern has a placeholder without its closing bracket.
    Pattern(PatternError),
    /// A log file could not be opened. The logger has already written a FATAL
    /// diagnostic to its console sink.
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing to, flushing or closing an open sink failed.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid file write mode string.
    InvalidFileMode(String),
}

impl Error {
    /// Whether the failure was already reported on the console by the logger itself.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::OpenFile { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "{e}"),
            Self::OpenFile { path, source } => {
                write!(f, "couldn't open file {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidFileMode(mode) => write!(f, "invalid file write mode: {mode}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::OpenFile { source, .. } | Self::Io(source) => Some(source),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PatternError> for Error {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}

impl From<ParseFileModeError> for Error {
    fn from(e: ParseFileModeError) -> Self {
        Self::InvalidFileMode(e.input().to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
