//! Console sink trait definition

use std::sync::Arc;

/// Destination for rendered console lines
///
/// Implementations:
/// - `StdoutConsole`: prints to stdout
/// - `MemoryConsole`: captures lines for tests
/// - `NoOpConsole`: discards everything
///
/// Console output is treated as infallible.
pub trait ConsoleSink: Send + Sync {
    /// Write one line, without a trailing newline
    fn write_line(&self, line: &str);
}

/// Type alias for an Arc-wrapped console sink
pub type SharedConsole = Arc<dyn ConsoleSink>;

/// Convenience macros for logging with format arguments
///
/// Each expands to the matching async method, so the result must be awaited:
///
/// ```rust,ignore
/// log_info!(logger, Tag::Service, "listening on {}", port).await;
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $logger.info($tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $logger.success($tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $logger.warning($tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $logger.error($tag, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $logger.debug($tag, &format!($($arg)*))
    };
}
