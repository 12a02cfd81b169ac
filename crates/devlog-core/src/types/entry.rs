//! A single log entry and its two renderings

use chrono::Utc;

use super::{Severity, Tag};

/// One log call, captured at call time
///
/// Entries are never stored. They exist only long enough to be rendered
/// into a console line and a file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub tag: Tag,
    pub message: String,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
}

impl LogEntry {
    pub fn new(
        severity: Severity,
        tag: Tag,
        message: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            severity,
            tag,
            message: message.into(),
            timestamp_ms,
        }
    }

    /// Create an entry stamped with the current time
    pub fn now(severity: Severity, tag: Tag, message: impl Into<String>) -> Self {
        Self::new(severity, tag, message, Utc::now().timestamp_millis())
    }

    /// Colorized console line, without timestamp or trailing newline
    ///
    /// The color is reset right after the severity token.
    pub fn console_line(&self) -> String {
        format!(
            "\x1B[{}m[{}]\x1B[0m[{}]: {}",
            self.severity.ansi_color(),
            self.severity,
            self.tag,
            self.message
        )
    }

    /// Plain file line, newline terminated
    pub fn file_line(&self) -> String {
        format!(
            "[{}][{}][{}]: {}\n",
            self.timestamp_ms, self.severity, self.tag, self.message
        )
    }
}
