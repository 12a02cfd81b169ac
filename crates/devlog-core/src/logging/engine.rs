//! Log engine: renders entries and performs the best-effort file append

use std::fs::File;
use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::SharedConsole;
use crate::config::BuildMode;
use crate::types::{LogEntry, Severity, Tag};

/// Renders and emits one log entry per call
///
/// The file handle is fixed at construction. Appends are serialized through
/// a mutex, one `write_all` + `flush` per line, so concurrent calls never
/// interleave within a line. Writes are plain blocking I/O, so the futures
/// returned here can be polled by any executor.
pub struct LogEngine {
    mode: BuildMode,
    console: SharedConsole,
    file: Option<Mutex<File>>,
}

impl LogEngine {
    /// Create an engine, optionally appending to `file`
    pub fn new(mode: BuildMode, console: SharedConsole, file: Option<File>) -> Self {
        Self {
            mode,
            console,
            file: file.map(Mutex::new),
        }
    }

    /// Create an engine that only writes to the console
    pub fn console_only(mode: BuildMode, console: SharedConsole) -> Self {
        Self::new(mode, console, None)
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Whether entries are also appended to a file
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Emit an entry at the given severity
    ///
    /// Never fails. In production mode this does nothing at all.
    pub async fn log(&self, severity: Severity, tag: Tag, message: &str) {
        if self.mode.is_production() {
            return;
        }

        let entry = LogEntry::now(severity, tag, message);
        self.console.write_line(&entry.console_line());

        if let Some(file) = &self.file {
            // A failed append drops this line only.
            let _ = append_line(file, &entry.file_line());
        }
    }

    pub async fn info(&self, tag: Tag, message: &str) {
        self.log(Severity::Info, tag, message).await
    }

    pub async fn success(&self, tag: Tag, message: &str) {
        self.log(Severity::Success, tag, message).await
    }

    pub async fn warning(&self, tag: Tag, message: &str) {
        self.log(Severity::Warning, tag, message).await
    }

    pub async fn error(&self, tag: Tag, message: &str) {
        self.log(Severity::Error, tag, message).await
    }

    pub async fn debug(&self, tag: Tag, message: &str) {
        self.log(Severity::Debug, tag, message).await
    }
}

impl std::fmt::Debug for LogEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogEngine")
            .field("mode", &self.mode)
            .field("has_file", &self.has_file())
            .finish()
    }
}

fn append_line(file: &Mutex<File>, line: &str) -> io::Result<()> {
    let mut file = file.lock();
    file.write_all(line.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryConsole;
    use std::fs;
    use std::future::Future;
    use std::path::Path;
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};
    use tempfile::tempdir;

    fn open_append(path: &Path) -> File {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap()
    }

    struct NoopWaker;

    impl Wake for NoopWaker {
        fn wake(self: Arc<Self>) {}
    }

    /// Drive a future to completion on the current thread, without a runtime
    fn block_on<F: Future>(future: F) -> F::Output {
        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut future = pin!(future);
        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }
        }
    }

    fn is_file_line(line: &str, severity: &str, tag: &str, message: &str) -> bool {
        let Some(rest) = line.strip_prefix('[') else {
            return false;
        };
        let Some((millis, rest)) = rest.split_once(']') else {
            return false;
        };
        !millis.is_empty()
            && millis.chars().all(|c| c.is_ascii_digit())
            && rest == format!("[{}][{}]: {}", severity, tag, message)
    }

    #[tokio::test]
    async fn test_console_only_logs_every_severity() {
        let console = Arc::new(MemoryConsole::new());
        let engine = LogEngine::console_only(BuildMode::Development, console.clone());
        assert!(!engine.has_file());

        engine.info(Tag::Service, "a").await;
        engine.success(Tag::Service, "b").await;
        engine.warning(Tag::Gsdk, "c").await;
        engine.error(Tag::Gsdk, "d").await;
        engine.debug(Tag::Service, "e").await;

        assert_eq!(
            console.lines(),
            vec![
                "\x1B[34m[INFO]\x1B[0m[SERVICE]: a",
                "\x1B[32m[SUCCESS]\x1B[0m[SERVICE]: b",
                "\x1B[33m[WARNING]\x1B[0m[GSDK]: c",
                "\x1B[31m[ERROR]\x1B[0m[GSDK]: d",
                "\x1B[90m[DEBUG]\x1B[0m[SERVICE]: e",
            ]
        );
    }

    #[tokio::test]
    async fn test_file_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.log");
        let console = Arc::new(MemoryConsole::new());
        let engine = LogEngine::new(
            BuildMode::Development,
            console.clone(),
            Some(open_append(&path)),
        );

        engine.error(Tag::Service, "Failed to connect.").await;
        engine.info(Tag::Gsdk, "ready").await;

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(is_file_line(lines[0], "ERROR", "SERVICE", "Failed to connect."));
        assert!(is_file_line(lines[1], "INFO", "GSDK", "ready"));
        assert!(content.ends_with('\n'));
        assert_eq!(console.len(), 2);
    }

    #[tokio::test]
    async fn test_production_is_silent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.log");
        let console = Arc::new(MemoryConsole::new());
        let engine = LogEngine::new(
            BuildMode::Production,
            console.clone(),
            Some(open_append(&path)),
        );

        for severity in Severity::ALL {
            engine.log(severity, Tag::Service, "hidden").await;
        }

        assert!(console.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("readonly.log");
        fs::write(&path, "").unwrap();

        // Opened read-only, so every append fails.
        let file = File::open(&path).unwrap();
        let console = Arc::new(MemoryConsole::new());
        let engine = LogEngine::new(BuildMode::Development, console.clone(), Some(file));

        engine.error(Tag::Service, "first").await;
        engine.info(Tag::Service, "second").await;

        assert_eq!(console.len(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_file_append_without_runtime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-runtime.log");
        let console = Arc::new(MemoryConsole::new());
        let engine = LogEngine::new(
            BuildMode::Development,
            console.clone(),
            Some(open_append(&path)),
        );

        block_on(engine.info(Tag::Service, "ready"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(is_file_line(lines[0], "INFO", "SERVICE", "ready"));
        assert_eq!(console.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_lines_whole() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("concurrent.log");
        let engine = Arc::new(LogEngine::new(
            BuildMode::Development,
            Arc::new(MemoryConsole::new()),
            Some(open_append(&path)),
        ));

        let mut handles = Vec::new();
        for i in 0..50 {
            let engine = engine.clone();
            handles.push(tokio::spawn(async move {
                engine.debug(Tag::Gsdk, &format!("message {}", i)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 50);
        for i in 0..50 {
            let message = format!("message {}", i);
            assert!(lines
                .iter()
                .any(|line| is_file_line(line, "DEBUG", "GSDK", &message)));
        }
    }
}
