//! The process-wide logger

use std::path::PathBuf;

use super::logger::{Logger, LoggerCell};
use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::logging::SharedConsole;

static LOGGER: LoggerCell = LoggerCell::new();

/// Initialize the global logger for the compiled build mode
///
/// Must be called once at startup. With `test_mode` set, file logging is
/// disabled. Repeated calls return the logger created by the first one.
pub fn initialize(test_mode: bool) -> LoggerResult<&'static Logger> {
    initialize_with(LoggerConfig::from_build().with_test_mode(test_mode))
}

/// Initialize the global logger from an explicit configuration
pub fn initialize_with(config: LoggerConfig) -> LoggerResult<&'static Logger> {
    LOGGER.initialize(config)
}

/// Initialize the global logger with a custom console sink
pub fn initialize_with_console(
    config: LoggerConfig,
    console: SharedConsole,
) -> LoggerResult<&'static Logger> {
    LOGGER.initialize_with_console(config, console)
}

/// The global logger
///
/// Returns `LoggerError::NotInitialized` before `initialize` has succeeded.
pub fn instance() -> LoggerResult<&'static Logger> {
    LOGGER.instance()
}

pub fn is_initialized() -> bool {
    LOGGER.is_initialized()
}

/// Log files written by this and earlier sessions of the global logger
pub fn list_log_files() -> LoggerResult<Vec<PathBuf>> {
    instance()?.list_log_files()
}
