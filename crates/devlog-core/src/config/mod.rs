//! Logger configuration
//!
//! - `BuildMode`: development or production behavior
//! - `LoggerConfig`: everything `initialize` needs, loadable from YAML

mod mode;
mod file;

pub use mode::BuildMode;
pub use file::LoggerConfig;
