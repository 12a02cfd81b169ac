//! No-op console sink

use super::traits::ConsoleSink;

/// A console sink that discards every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpConsole;

impl NoOpConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for NoOpConsole {
    fn write_line(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_console() {
        let console = NoOpConsole::new();
        console.write_line("\x1B[34m[INFO]\x1B[0m[SERVICE]: ignored");
    }
}
