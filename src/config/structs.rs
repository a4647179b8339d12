//! Configuration struct definitions.

use crate::fmt::DEFAULT_PATTERN;
use crate::logger::DEFAULT_NAME;
use serde::Deserialize;

/// `[general]`: identity, starting level, pattern and failure policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logger name shown by `{n}`.
    pub name: String,
    /// Initial level.
    pub level: String,
    /// Decoration pattern.
    pub pattern: String,
    /// `exit` or `report`.
    pub on_error: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: "info".to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            on_error: "exit".to_string(),
        }
    }
}

/// `[flags]`: the user-facing feature flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    /// Show DEBUG records.
    pub debug: bool,
    /// Emit ANSI colors.
    pub colors: bool,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            debug: true,
            colors: true,
        }
    }
}

/// `[file]`: file sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `append`/`a` or `truncate`/`w`.
    pub mode: String,
    /// Default log file for the command line front end; `~` is expanded.
    pub path: Option<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            mode: "append".to_string(),
            path: None,
        }
    }
}
