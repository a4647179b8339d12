//! File open modes and the standalone truncate helper.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Append-or-truncate policy applied when the logger opens a file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileMode {
    /// `"a"`: keep existing content, write at the end.
    #[default]
    Append,
    /// `"w"`: empty the file on open.
    Truncate,
}

impl FileMode {
    /// The `fopen`-style mode string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "a",
            Self::Truncate => "w",
        }
    }

    /// Opens (creating if missing) `path` for writing in this mode.
    ///
    /// # Errors
    /// Any error from the underlying `open`.
    pub fn open(self, path: &Path) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        match self {
            Self::Append => options.append(true),
            Self::Truncate => options.write(true).truncate(true),
        };
        options.open(path)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFileModeError(String);

impl ParseFileModeError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseFileModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown file write mode: '{}'", self.0)
    }
}

impl std::error::Error for ParseFileModeError {}

impl FromStr for FileMode {
    type Err = ParseFileModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "append" => Ok(Self::Append),
            "w" | "truncate" | "write" => Ok(Self::Truncate),
            _ => Err(ParseFileModeError(s.to_string())),
        }
    }
}

/// Empties `path` (creating it if missing), independent of any open sink.
///
/// # Errors
/// Any error from opening the file.
pub fn clear_file(path: &Path) -> io::Result<()> {
    FileMode::Truncate.open(path).map(drop)
}
