//! Logger state and the two emission paths (console and file).
//!
//! A [`Logger`] is plain owned state: every configuration call mutates it and takes
//! effect for the next emission only. The process-wide instance lives in [`global`]
//! behind a mutex; a standalone `Logger` is useful for embedding and tests.

mod builder;
mod flags;
mod from_config;
pub mod global;

pub use builder::LoggerBuilder;
pub use flags::Flags;
pub use global::ErrorPolicy;

use crate::error::{Error, Result};
use crate::fmt::{CallSite, Clock, Pattern, RenderContext};
use crate::level::Level;
use crate::output::{self, Console, FileMode, Sink};
use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// Name used when nothing else was given.
pub const DEFAULT_NAME: &str = "zlog";

/// Where a single emission is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// The console target (standard error unless redirected).
    Console,
    /// Opened for this emission only, then closed again.
    File(&'a Path),
}

/// Everything the renderer reads and every configuration call writes.
pub struct Logger {
    name: String,
    level: Level,
    flags: Flags,
    mode: FileMode,
    sink: Sink,
    console: Console,
    pattern: String,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("flags", &self.flags)
            .field("mode", &self.mode)
            .field("sink", &self.sink)
            .field("console", &self.console)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Logger {
    /// Level INFO, flags [`Flags::ALL`], append mode, standard error, default pattern.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        LoggerBuilder::new().name(name).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// The active pattern, exactly as it was set.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replaces the pattern. Validation happens on the next render.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    #[must_use]
    pub const fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Installs `sink` as the active destination. Switching to an interactive
    /// terminal turns [`Flags::USE_COLORS`] on.
    pub fn set_output_stream(&mut self, sink: impl Into<Sink>) {
        let sink = sink.into();
        if sink.is_terminal() {
            self.flags.insert(Flags::USE_COLORS);
        }
        self.sink = sink;
    }

    #[must_use]
    pub const fn console(&self) -> &Console {
        &self.console
    }

    /// Redirects console emissions and the post-close fallback.
    pub fn set_console(&mut self, console: Console) {
        self.console = console;
    }

    #[must_use]
    pub const fn file_mode(&self) -> FileMode {
        self.mode
    }

    /// Applies to the next [`open_file`](Self::open_file).
    pub const fn set_file_write_mode(&mut self, mode: FileMode) {
        self.mode = mode;
    }

    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Box::new(clock);
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Bitwise OR.
    pub fn set_flags(&mut self, mask: Flags) {
        self.flags.insert(mask);
    }

    /// Bitwise AND-NOT.
    pub fn unset_flags(&mut self, mask: Flags) {
        self.flags.remove(mask);
    }

    /// Bitwise XOR.
    pub fn flip_flags(&mut self, mask: Flags) {
        self.flags.toggle(mask);
    }

    /// Opens `path` with the current file mode and makes it the active sink.
    ///
    /// On failure the level becomes FATAL, a `Couldn't open file` record is written to
    /// the console, and the active sink is left on the console.
    ///
    /// # Errors
    /// [`Error::OpenFile`] when the file cannot be opened.
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        match Sink::open(path, self.mode) {
            Ok(sink) => {
                self.sink = sink;
                Ok(())
            }
            Err(source) => {
                self.report_open_failure(path, &source);
                Err(Error::OpenFile {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    fn report_open_failure(&mut self, path: &Path, source: &io::Error) {
        self.set_level(Level::Fatal);
        self.set_output_stream(self.console.sink());
        let site = crate::call_site!();
        let reported = self.emit(
            site,
            format_args!("Couldn't open file: {} ({source})\n", path.display()),
        );
        if reported.is_err() {
            // The pattern itself is broken; fall back to a bare line.
            let _ = writeln!(
                self.sink,
                "[{}] Couldn't open file: {} ({source})",
                Level::Fatal.tag(),
                path.display()
            );
        }
    }

    /// Flushes and drops the active sink, then falls back to the console.
    ///
    /// # Errors
    /// The flush error of the sink being closed; the fallback happens regardless.
    pub fn close_stream(&mut self) -> Result<()> {
        let mut closed = std::mem::replace(&mut self.sink, self.console.sink());
        closed.flush()?;
        Ok(())
    }

    /// Truncates `path` to empty without touching the active sink.
    ///
    /// # Errors
    /// Any error from opening the file.
    pub fn clear_file(&self, path: &Path) -> Result<()> {
        output::clear_file(path)?;
        Ok(())
    }

    /// False only for DEBUG while the `DEBUG` flag is unset.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.level != Level::Debug || self.flags.contains(Flags::DEBUG)
    }

    /// Renders the pattern for the current level and writes it, followed by `args`,
    /// to the active sink in a single write.
    ///
    /// # Errors
    /// [`Error::Pattern`] for a malformed pattern (nothing is written), [`Error::Io`]
    /// when the sink rejects the write.
    pub fn emit(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let pattern = Pattern::parse(&self.pattern)?;
        let ctx = RenderContext {
            timestamp: self.clock.now(),
            site,
            logger_name: &self.name,
            level: self.level,
        };

        let mut line = pattern.render(&ctx, self.flags.contains(Flags::USE_COLORS));
        line.write_fmt(args).map_err(|_| {
            io::Error::other("a formatting trait implementation returned an error")
        })?;

        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }

    /// One emission at `level` to `destination`.
    ///
    /// # Errors
    /// See [`log_to_console`](Self::log_to_console) and [`log_to_file`](Self::log_to_file).
    pub fn log(
        &mut self,
        level: Level,
        destination: Destination<'_>,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        match destination {
            Destination::Console => self.log_to_console(level, site, args),
            Destination::File(path) => self.log_to_file(path, level, site, args),
        }
    }

    /// Sets the level, points the sink back at the console and emits. A suppressed
    /// DEBUG record changes nothing but the level.
    ///
    /// # Errors
    /// Same as [`emit`](Self::emit).
    pub fn log_to_console(
        &mut self,
        level: Level,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        self.set_level(level);
        if !self.is_enabled() {
            return Ok(());
        }

        self.set_output_stream(self.console.sink());
        self.emit(site, args)
    }

    /// Sets the level, opens `path`, emits without colors, closes the file and puts the
    /// color flag back the way it was. A suppressed DEBUG record never opens the file.
    ///
    /// # Errors
    /// [`Error::OpenFile`] if the file cannot be opened, otherwise the first error of
    /// emitting or closing.
    pub fn log_to_file(
        &mut self,
        path: &Path,
        level: Level,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        self.set_level(level);
        if !self.is_enabled() {
            return Ok(());
        }

        self.open_file(path)?;
        let mut scope = FileScope::enter(self);
        let emitted = scope.emit(site, args);
        let closed = scope.close_stream();
        drop(scope);

        emitted.and(closed)
    }
}

/// Holds colors off for the duration of one file emission.
///
/// Dropping it (normally or while unwinding) restores the color flag and, if the file
/// sink is somehow still active, returns to the console.
struct FileScope<'a> {
    logger: &'a mut Logger,
}

impl<'a> FileScope<'a> {
    fn enter(logger: &'a mut Logger) -> Self {
        if logger.flags.contains(Flags::USE_COLORS) {
            logger.flags.remove(Flags::USE_COLORS);
            logger.flags.insert(Flags::COLOR_SUPPRESSED);
        }
        Self { logger }
    }
}

impl Deref for FileScope<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.logger
    }
}

impl DerefMut for FileScope<'_> {
    fn deref_mut(&mut self) -> &mut Logger {
        self.logger
    }
}

impl Drop for FileScope<'_> {
    fn drop(&mut self) {
        if self.logger.sink.is_file() {
            self.logger.sink = self.logger.console.sink();
        }
        if self.logger.flags.contains(Flags::COLOR_SUPPRESSED) {
            self.logger.flags.remove(Flags::COLOR_SUPPRESSED);
            self.logger.flags.insert(Flags::USE_COLORS);
        }
    }
}
