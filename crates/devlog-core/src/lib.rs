//! devlog Core
//!
//! Development-time logging for host applications. One global logger prints
//! colorized lines to the console and appends timestamped lines to a
//! per-session file under the platform's application data directory.
//! Production builds log nothing.
//!
//! ```rust,ignore
//! use devlog_core::{initialize, instance, Tag};
//!
//! initialize(false)?;
//! instance()?.info(Tag::Service, "ready").await;
//!
//! for path in devlog_core::list_log_files()? {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! File lines look like `[1718000000123][ERROR][SERVICE]: Failed to connect.`
//! and live in `<base>/<app-name>/logs/<YYYY_M_D_H_Min_S>.log`.

pub mod types;
pub mod logging;
pub mod config;
pub mod platform;
pub mod facade;
mod error;

// Re-export commonly used types
pub use types::{LogEntry, Severity, Tag};

pub use logging::{ConsoleSink, LogEngine, MemoryConsole, NoOpConsole, SharedConsole, StdoutConsole};

pub use config::{BuildMode, LoggerConfig};

pub use platform::{list_log_files_in, sanitize_app_name, LogDirectory, Platform};

pub use facade::{
    initialize, initialize_with, initialize_with_console, instance, is_initialized,
    list_log_files, Logger, LoggerCell,
};

pub use error::{LoggerError, LoggerResult};
