//! Logger error types

use thiserror::Error;

/// Errors raised while setting up or querying the logger
///
/// Failures while appending a single entry are never reported; see
/// `LogEngine::log`.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Logger accessed before `initialize`
    #[error("Logger is not initialized")]
    NotInitialized,

    /// Log directory requested on a platform without a known layout
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The platform base directory could not be determined
    #[error("No base directory available on {0}")]
    BaseDirUnavailable(String),

    /// No application name configured and none could be derived
    #[error("Application name is unavailable")]
    AppNameUnavailable,

    /// Filesystem error while creating or listing log files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid logger configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Create an unsupported platform error
    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(platform.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
