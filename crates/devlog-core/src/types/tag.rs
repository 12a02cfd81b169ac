//! Subsystem tags

use std::fmt;

/// Logical subsystem that emitted a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Background service
    Service,
    /// Game SDK integration
    Gsdk,
}

impl Tag {
    /// Uppercase token used in console and file lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Service => "SERVICE",
            Tag::Gsdk => "GSDK",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
