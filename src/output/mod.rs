//! Destinations a record can be written to.
//!
//! The set is closed: standard error, standard output, a file opened by the logger,
//! or an in-memory buffer. Console-like targets are described by [`Console`] so the
//! logger can return to them after a file sink is closed.

mod file;
mod memory;
mod terminal;

pub use file::{FileMode, ParseFileModeError, clear_file};
pub use memory::MemorySink;
pub use terminal::Console;

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// The writable destination currently receiving rendered bytes.
#[derive(Debug)]
pub enum Sink {
    Stderr,
    Stdout,
    /// Owned handle; dropping the sink closes the file.
    File { path: PathBuf, file: File },
    Memory(MemorySink),
}

impl Sink {
    /// Opens `path` with the given mode and wraps it as a sink.
    ///
    /// # Errors
    /// Any error from opening the file.
    pub fn open(path: &Path, mode: FileMode) -> io::Result<Self> {
        let file = mode.open(path)?;
        Ok(Self::File {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Only a console attached to a terminal counts; files and buffers never do.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Stderr => io::stderr().is_terminal(),
            Self::Stdout => io::stdout().is_terminal(),
            Self::File { .. } | Self::Memory(_) => false,
        }
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Path of the open file, if this is a file sink.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr => io::stderr().lock().write(buf),
            Self::Stdout => io::stdout().lock().write(buf),
            Self::File { file, .. } => file.write(buf),
            Self::Memory(memory) => memory.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::Stdout => io::stdout().lock().write_all(buf),
            Self::File { file, .. } => file.write_all(buf),
            Self::Memory(memory) => memory.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().flush(),
            Self::Stdout => io::stdout().flush(),
            Self::File { file, .. } => file.flush(),
            Self::Memory(memory) => memory.flush(),
        }
    }
}

impl From<MemorySink> for Sink {
    fn from(memory: MemorySink) -> Self {
        Self::Memory(memory)
    }
}

impl From<Console> for Sink {
    fn from(console: Console) -> Self {
        console.sink()
    }
}
