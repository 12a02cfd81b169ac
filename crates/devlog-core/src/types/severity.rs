//! Log severity

use std::fmt;

/// Importance of a log entry
///
/// There is no ordering between severities: every severity is emitted
/// whenever logging is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

impl Severity {
    /// Every severity, in declaration order
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
    ];

    /// Uppercase token used in console and file lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
        }
    }

    /// ANSI SGR color code for the console severity token
    pub fn ansi_color(&self) -> u8 {
        match self {
            Severity::Info => 34,
            Severity::Success => 32,
            Severity::Warning => 33,
            Severity::Error => 31,
            Severity::Debug => 90,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tokens() {
        let tokens: Vec<_> = Severity::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(tokens, vec!["INFO", "SUCCESS", "WARNING", "ERROR", "DEBUG"]);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Info.ansi_color(), 34);
        assert_eq!(Severity::Success.ansi_color(), 32);
        assert_eq!(Severity::Warning.ansi_color(), 33);
        assert_eq!(Severity::Error.ansi_color(), 31);
        assert_eq!(Severity::Debug.ansi_color(), 90);
    }
}
