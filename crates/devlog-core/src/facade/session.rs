//! Per-session log file creation

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::LoggerResult;

/// File name for a session started at `started`
///
/// Local time, second precision, no zero padding: `YYYY_M_D_H_Min_S.log`.
pub fn session_file_name(started: &DateTime<Local>) -> String {
    format!("{}.log", started.format("%Y_%-m_%-d_%-H_%-M_%-S"))
}

/// Create the log file for a session starting now, opened for append
pub fn open_session_file(dir: &Path) -> LoggerResult<(PathBuf, File)> {
    let path = dir.join(session_file_name(&Local::now()));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
