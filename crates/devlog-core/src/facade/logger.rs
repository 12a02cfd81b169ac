//! Logger facade and its once-only cell

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::session::open_session_file;
use crate::config::{BuildMode, LoggerConfig};
use crate::error::{LoggerError, LoggerResult};
use crate::logging::{LogEngine, SharedConsole, StdoutConsole};
use crate::platform::LogDirectory;
use crate::types::{Severity, Tag};

/// The active logger: one engine plus the directory its files live in
pub struct Logger {
    engine: LogEngine,
    directory: LogDirectory,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Build a logger writing console lines to `console`
    ///
    /// In development mode outside test mode this creates the log directory
    /// and a fresh session file.
    pub fn open_with_console(config: LoggerConfig, console: SharedConsole) -> LoggerResult<Self> {
        let directory = LogDirectory::from_config(&config);

        let (log_file, file) = if config.writes_file() {
            let dir = directory.create()?;
            let (path, file) = open_session_file(&dir)?;
            tracing::debug!(path = %path.display(), "created session log file");
            (Some(path), Some(file))
        } else {
            (None, None)
        };

        Ok(Self {
            engine: LogEngine::new(config.build_mode, console, file),
            directory,
            log_file,
        })
    }

    pub fn engine(&self) -> &LogEngine {
        &self.engine
    }

    pub fn build_mode(&self) -> BuildMode {
        self.engine.mode()
    }

    /// Path of this session's log file, if file logging is enabled
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Resolved log directory (may not exist)
    pub fn log_dir(&self) -> LoggerResult<PathBuf> {
        self.directory.resolve()
    }

    /// Log files in the log directory, from this and earlier sessions
    pub fn list_log_files(&self) -> LoggerResult<Vec<PathBuf>> {
        self.directory.list_log_files()
    }

    pub async fn log(&self, severity: Severity, tag: Tag, message: &str) {
        self.engine.log(severity, tag, message).await
    }

    pub async fn info(&self, tag: Tag, message: &str) {
        self.engine.info(tag, message).await
    }

    pub async fn success(&self, tag: Tag, message: &str) {
        self.engine.success(tag, message).await
    }

    pub async fn warning(&self, tag: Tag, message: &str) {
        self.engine.warning(tag, message).await
    }

    pub async fn error(&self, tag: Tag, message: &str) {
        self.engine.error(tag, message).await
    }

    pub async fn debug(&self, tag: Tag, message: &str) {
        self.engine.debug(tag, message).await
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("engine", &self.engine)
            .field("directory", &self.directory)
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// Holds at most one `Logger`
///
/// The first successful `initialize` wins. Later calls return the existing
/// logger without touching the filesystem. A failed initialize leaves the
/// cell empty.
#[derive(Debug, Default)]
pub struct LoggerCell {
    cell: OnceCell<Logger>,
}

impl LoggerCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn initialize(&self, config: LoggerConfig) -> LoggerResult<&Logger> {
        self.initialize_with_console(config, Arc::new(StdoutConsole::new()))
    }

    pub fn initialize_with_console(
        &self,
        config: LoggerConfig,
        console: SharedConsole,
    ) -> LoggerResult<&Logger> {
        if let Some(logger) = self.cell.get() {
            tracing::debug!(
                mode = logger.build_mode().as_str(),
                "logger already initialized, ignoring new configuration"
            );
            return Ok(logger);
        }
        self.cell
            .get_or_try_init(|| Logger::open_with_console(config, console))
    }

    /// The initialized logger, or `NotInitialized`
    pub fn instance(&self) -> LoggerResult<&Logger> {
        self.cell.get().ok_or(LoggerError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
