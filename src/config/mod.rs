//! TOML configuration loading.
//!
//! Every field is optional, so an empty or missing file yields the same logger
//! `init` would build.

mod structs;

pub use structs::{FileConfig, FlagsConfig, GeneralConfig};

use crate::internal;
use crate::level::Level;
use crate::logger::{ErrorPolicy, Flags};
use crate::output::FileMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Parsed `zlog.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub flags: FlagsConfig,
    pub file: FileConfig,
}

impl Config {
    /// Reads the file at the default location; a missing file means defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Reads an explicit path, expanding a leading `~`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let path = expand_path(&path.to_string_lossy());
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        let content = fs::read_to_string(&path)?;
        let config = content.parse()?;
        internal::debug("CONFIG", "Config loaded");
        Ok(config)
    }

    /// `<config_dir>/zlog/zlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("zlog").join("zlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Strict form of [`parse_level`](Self::parse_level).
    ///
    /// # Errors
    /// [`Error::InvalidLevel`](crate::Error::InvalidLevel) for an unknown level string.
    pub fn try_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// Strict form of [`parse_file_mode`](Self::parse_file_mode).
    ///
    /// # Errors
    /// [`Error::InvalidFileMode`](crate::Error::InvalidFileMode) for an unknown mode string.
    pub fn try_file_mode(&self) -> Result<FileMode, crate::Error> {
        Ok(self.file.mode.parse()?)
    }

    /// Unknown strings fall back to INFO with a warning.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.try_level().unwrap_or_else(|e| {
            internal::warning("CONFIG", &format!("{e}, using info"));
            Level::Info
        })
    }

    /// Unknown strings fall back to append with a warning.
    #[must_use]
    pub fn parse_file_mode(&self) -> FileMode {
        self.try_file_mode().unwrap_or_else(|e| {
            internal::warning("CONFIG", &format!("{e}, using append"));
            FileMode::Append
        })
    }

    /// Unknown strings fall back to [`ErrorPolicy::Exit`].
    #[must_use]
    pub fn parse_policy(&self) -> ErrorPolicy {
        self.general.on_error.parse().unwrap_or_else(|_| {
            internal::warning(
                "CONFIG",
                &format!("Unknown error policy '{}', using exit", self.general.on_error),
            );
            ErrorPolicy::Exit
        })
    }

    /// Initial flag bitset from `[flags]`.
    #[must_use]
    pub fn flags(&self) -> Flags {
        let mut flags = Flags::empty();
        flags.set(Flags::DEBUG, self.flags.debug);
        flags.set(Flags::USE_COLORS, self.flags.colors);
        flags
    }

    /// `[file] path` with `~` expanded.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.path.as_deref().map(expand_path)
    }
}

impl FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
