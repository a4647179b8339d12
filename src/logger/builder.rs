//! Stepwise construction of a [`Logger`] with non-default settings.

use super::{DEFAULT_NAME, Flags, Logger};
use crate::fmt::{Clock, DEFAULT_PATTERN, SystemClock};
use crate::level::Level;
use crate::output::{Console, FileMode};

/// Every field starts at the value `init` would give it.
pub struct LoggerBuilder {
    name: String,
    level: Level,
    flags: Flags,
    mode: FileMode,
    console: Console,
    pattern: String,
    clock: Box<dyn Clock>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: Level::Info,
            flags: Flags::ALL,
            mode: FileMode::Append,
            console: Console::Stderr,
            pattern: DEFAULT_PATTERN.to_string(),
            clock: Box::new(SystemClock),
        }
    }

    /// Shown by `{n}`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replaces the whole bitset rather than OR-ing into it.
    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn file_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Not validated here; a bad pattern surfaces on the first emission.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The active sink starts on the console target.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            level: self.level,
            flags: self.flags,
            mode: self.mode,
            sink: self.console.sink(),
            console: self.console,
            pattern: self.pattern,
            clock: self.clock,
        }
    }
}
