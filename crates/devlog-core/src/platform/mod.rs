//! Platform detection and log directory layout

mod os;
mod directory;

pub use os::Platform;
pub use directory::{list_log_files_in, sanitize_app_name, LogDirectory};
