//! CLI module for zlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use crate::config::Config;
use crate::internal;
use crate::logger::global;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Info,
    Debug,
    Trace,
    #[value(alias = "warn")]
    Warning,
    Error,
    Fatal,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// zlog - Write decorated log records from the command line.
#[derive(Parser)]
#[command(
    name = "zlog",
    version,
    about = "Write decorated log records from the command line"
)]
pub struct Cli {
    /// Config file (default: <config_dir>/zlog/zlog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Logger name shown by {n}
    #[arg(long, global = true)]
    pub name: Option<String>,
    /// Decoration pattern
    #[arg(long, global = true, value_name = "PATTERN")]
    pub pattern: Option<String>,
    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Show DEBUG records and zlog's own debug diagnostics
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message to stderr or to a file.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
        /// Append the record to this file instead of stderr
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Truncate the file before writing (ignored without a file)
        #[arg(long)]
        truncate: bool,
    },
    /// Empty a log file.
    Clear {
        /// File to truncate (created if missing)
        path: PathBuf,
    },
    /// Print the feature flags of a freshly initialized logger.
    Flags,
}

impl Cli {
    /// Loads the config file and layers the global options over it.
    ///
    /// # Errors
    /// Returns error if an explicit or existing config file can't be read or parsed.
    pub fn resolve_config(&self) -> crate::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(name) = &self.name {
            config.general.name.clone_from(name);
        }
        if let Some(pattern) = &self.pattern {
            config.general.pattern.clone_from(pattern);
        }
        if self.debug {
            config.flags.debug = true;
        }
        if self.no_color {
            config.flags.colors = false;
        }
        Ok(config)
    }
}

/// Initializes both loggers from the resolved config and runs the subcommand.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            internal::error("CLI", &format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    global::init_with_config(&config);
    internal::init_with_config(&config);

    match &cli.command {
        Command::Log {
            level,
            message,
            file,
            truncate,
        } => {
            let file = file.clone().or_else(|| config.file_path());
            commands::cmd_log((*level).into(), &message.join(" "), file.as_deref(), *truncate)
        }
        Command::Clear { path } => commands::cmd_clear(path),
        Command::Flags => commands::cmd_flags(),
    }
}

pub use commands::{cmd_clear, cmd_flags, cmd_log};
