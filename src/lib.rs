//! `zlog` - a single global logger with pattern templates, ANSI colors and file sinks.
//!
//! Every record is prefixed by a pattern such as
//! `"{D}/{M}/{Y} {h}:{m}:{s} | {f} @ {l} | {n} | {t} > "`, where each placeholder
//! expands to a date field, the call site, the logger name or the level tag. On a
//! terminal every piece is colored and followed by a reset; file output is never
//! colored.
//!
//! # Example
//!
//! ```no_run
//! use zlog::{Flags, Level};
//!
//! zlog::init("app");
//! zlog::unset_flags(Flags::DEBUG);
//!
//! zlog::info!("started with {} workers\n", 4);
//! zlog::debug!("not shown\n");
//! zlog::error!(to: "/tmp/app.log", "disk {} is full\n", "/dev/sda1");
//! zlog::log!(Level::Trace, "done\n");
//! ```
//!
//! A standalone [`Logger`] offers the same operations without the global lock.
//!
//! # Features
//!
//! - `cli` (default): the `zlog` command line front end

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

mod macros;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::{Error, Result};
pub use fmt::{AnsiColor, CallSite, Clock, FixedClock, Pattern, PatternError, SystemClock};
pub use level::Level;
pub use logger::global::{
    clear_file, close_stream, error_policy, flip_flags, get_flags, init, init_with_config, level,
    open_file, pattern, set_clock, set_console, set_error_policy, set_file_write_mode, set_flags,
    set_level, set_output_stream, set_pattern, try_emit, unset_flags,
};
pub use logger::{Destination, ErrorPolicy, Flags, Logger, LoggerBuilder};
pub use output::{Console, FileMode, MemorySink, Sink};
