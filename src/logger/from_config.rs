//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Creates a logger from a given config. Unknown level or mode strings fall back
    /// to their defaults; the pattern is taken as-is.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        internal::debug(
            "LOGGER",
            &format!("Initializing logger name={}", config.general.name),
        );

        let logger = LoggerBuilder::new()
            .name(&config.general.name)
            .level(config.parse_level())
            .pattern(&config.general.pattern)
            .flags(config.flags())
            .file_mode(config.parse_file_mode())
            .build();

        internal::debug(
            "LOGGER",
            &format!(
                "Logger ready: level={}, flags={:#04x}, mode={}",
                logger.level(),
                logger.flags().bits(),
                logger.file_mode()
            ),
        );
        logger
    }
}
