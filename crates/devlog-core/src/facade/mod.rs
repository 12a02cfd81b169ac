//! Process-wide logger lifecycle
//!
//! `LoggerCell` holds at most one `Logger`. The crate keeps one global cell,
//! driven by `initialize` and `instance`.

mod session;
mod logger;
mod global;

pub use session::{open_session_file, session_file_name};
pub use logger::{Logger, LoggerCell};
pub use global::{
    initialize, initialize_with, initialize_with_console, instance, is_initialized,
    list_log_files,
};
