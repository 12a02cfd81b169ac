//! Logger configuration, optionally read from a YAML file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::mode::BuildMode;
use crate::error::{LoggerError, LoggerResult};

/// Settings consumed by `initialize`
///
/// # Example
///
/// ```
/// use devlog_core::config::{BuildMode, LoggerConfig};
///
/// let config = LoggerConfig::from_yaml_str(
///     "build_mode: development\napp_name: My App\n",
/// ).unwrap();
/// assert_eq!(config.build_mode, BuildMode::Development);
/// assert_eq!(config.app_name.as_deref(), Some("My App"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Development or production behavior
    pub build_mode: BuildMode,

    /// Disable file logging regardless of build mode
    pub test_mode: bool,

    /// Application name used for the log directory.
    /// Defaults to the running executable's name.
    pub app_name: Option<String>,

    /// Replaces the platform base directory
    pub log_root: Option<PathBuf>,
}

impl LoggerConfig {
    /// Configuration matching the compiled build mode
    pub fn from_build() -> Self {
        Self::default()
    }

    /// Test configuration: console only, never touches the filesystem
    pub fn test() -> Self {
        Self::default().with_test_mode(true)
    }

    pub fn with_build_mode(mut self, build_mode: BuildMode) -> Self {
        self.build_mode = build_mode;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_log_root(mut self, log_root: impl Into<PathBuf>) -> Self {
        self.log_root = Some(log_root.into());
        self
    }

    /// Whether `initialize` should create a session log file
    pub fn writes_file(&self) -> bool {
        !self.test_mode && !self.build_mode.is_production()
    }

    /// Parse configuration from YAML
    ///
    /// Missing keys take their default values.
    pub fn from_yaml_str(yaml: &str) -> LoggerResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LoggerError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}
