//! Console target: where console emissions go and where the logger falls back to
//! after a file sink is closed.

use super::{MemorySink, Sink};

/// Standard error unless a host redirects it.
#[derive(Debug, Clone, Default)]
pub enum Console {
    #[default]
    Stderr,
    Stdout,
    /// Captures console output in memory instead of writing to a stream.
    Memory(MemorySink),
}

impl Console {
    /// A fresh sink pointing at this console.
    #[must_use]
    pub fn sink(&self) -> Sink {
        match self {
            Self::Stderr => Sink::Stderr,
            Self::Stdout => Sink::Stdout,
            Self::Memory(memory) => Sink::Memory(memory.clone()),
        }
    }
}
