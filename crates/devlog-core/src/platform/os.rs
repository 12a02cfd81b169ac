//! Operating system detection

use std::fmt;
use std::path::PathBuf;

use crate::error::{LoggerError, LoggerResult};

/// Operating system the logger runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Macos,
    Windows,
    Linux,
    /// Anything without a known log directory layout
    Other(String),
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            "macos" => Platform::Macos,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Other(os) => os,
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Android | Platform::Ios)
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, Platform::Macos | Platform::Windows | Platform::Linux)
    }

    /// Fail unless this platform has a known log directory layout
    pub fn ensure_supported(&self) -> LoggerResult<()> {
        if self.is_mobile() || self.is_desktop() {
            Ok(())
        } else {
            Err(LoggerError::unsupported_platform(self.as_str()))
        }
    }

    /// Base directory log folders live under
    ///
    /// Mobile platforms use the user documents directory, desktop platforms
    /// the application support (data) directory.
    pub fn base_dir(&self) -> LoggerResult<PathBuf> {
        self.ensure_supported()?;

        let base = if self.is_mobile() {
            dirs::document_dir()
        } else {
            dirs::data_dir()
        };

        base.ok_or_else(|| LoggerError::BaseDirUnavailable(self.as_str().to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
