//! Log directory resolution and log file enumeration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::os::Platform;
use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};

/// Characters replaced with `_` in directory names
const RESERVED_CHARS: [char; 10] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|', ' '];

/// Name of the folder holding log files, under the app directory
const LOGS_DIR_NAME: &str = "logs";

/// Extension of session log files
const LOG_EXTENSION: &str = "log";

/// Replace every path-breaking character in `name` with `_`
pub fn sanitize_app_name(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Files directly inside `dir` with a `.log` extension
///
/// A missing directory yields an empty list. Order is whatever the
/// filesystem enumerates.
pub fn list_log_files_in(dir: &Path) -> LoggerResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == LOG_EXTENSION) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Where log files for one application live
///
/// Resolves to `<base>/<sanitized-app-name>/logs`, where `<base>` is the
/// configured root or the platform base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDirectory {
    platform: Platform,
    app_name: Option<String>,
    root: Option<PathBuf>,
}

impl LogDirectory {
    pub fn new(platform: Platform, app_name: Option<String>, root: Option<PathBuf>) -> Self {
        Self {
            platform,
            app_name,
            root,
        }
    }

    /// Directory for the current platform, named and rooted per `config`
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(
            Platform::current(),
            config.app_name.clone(),
            config.log_root.clone(),
        )
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Unsanitized application name
    ///
    /// Falls back to the running executable's file stem.
    pub fn app_name(&self) -> LoggerResult<String> {
        if let Some(name) = &self.app_name {
            return Ok(name.clone());
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .filter(|name| !name.is_empty())
            .ok_or(LoggerError::AppNameUnavailable)
    }

    /// Compute the log directory path without touching the filesystem
    pub fn resolve(&self) -> LoggerResult<PathBuf> {
        self.platform.ensure_supported()?;

        let base = match &self.root {
            Some(root) => root.clone(),
            None => self.platform.base_dir()?,
        };

        Ok(base
            .join(sanitize_app_name(&self.app_name()?))
            .join(LOGS_DIR_NAME))
    }

    /// Resolve the log directory, creating it and its parents if absent
    pub fn create(&self) -> LoggerResult<PathBuf> {
        let dir = self.resolve()?;
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Log files currently in the resolved directory
    pub fn list_log_files(&self) -> LoggerResult<Vec<PathBuf>> {
        list_log_files_in(&self.resolve()?)
    }
}
