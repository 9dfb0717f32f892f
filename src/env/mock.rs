//! Mock environment implementations for testing
//!
//! These implementations use in-memory data structures and provide controlled,
//! predictable behavior for testing without actual I/O operations.

use super::traits::{ClockEnv, ConsoleEnv, FileEnv, VarEnv};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Mock file system for testing
///
/// Stores files in memory and provides controlled file system operations.
///
/// # Examples
///
/// ```
/// use fixture_showcase::env::{FileEnv, MockFileEnv};
/// use std::path::Path;
///
/// let env = MockFileEnv::new();
/// env.add_file("infile.txt", "Awesome test data!");
///
/// let content = env.read_to_string(Path::new("infile.txt")).unwrap();
/// assert_eq!(content, "Awesome test data!");
/// ```
#[derive(Debug, Clone)]
pub struct MockFileEnv {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    write_errors: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MockFileEnv {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            write_errors: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a file to the mock file system
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Make every write to `path` fail with `message`
    pub fn set_write_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.write_errors
            .lock()
            .unwrap()
            .insert(path.into(), message.into());
    }

    /// Current content of a file, if present
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Get all files in the mock file system
    pub fn files(&self) -> HashMap<PathBuf, String> {
        self.files.lock().unwrap().clone()
    }
}

impl Default for MockFileEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl FileEnv for MockFileEnv {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )
            })
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(message) = self.write_errors.lock().unwrap().get(path) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                message.clone(),
            ));
        }

        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// In-memory variable table
///
/// Setting and removing variables here never touches the real process
/// environment, so tests using it can run in parallel.
#[derive(Debug, Clone, Default)]
pub struct MockVarEnv {
    vars: Arc<Mutex<HashMap<String, String>>>,
}

impl MockVarEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of `set`
    pub fn with_var(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.lock().unwrap().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.lock().unwrap().remove(key);
    }
}

impl VarEnv for MockVarEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.lock().unwrap().get(key).cloned()
    }
}

/// Virtual clock
///
/// `sleep` advances virtual time instantly and records the requested
/// duration, so elapsed-time logic is deterministic under test.
#[derive(Debug, Clone)]
pub struct MockClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Move virtual time forward without recording a sleep
    pub fn advance(&self, duration: Duration) {
        *self.offset.lock().unwrap() += duration;
    }

    /// Total virtual time elapsed since creation
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock().unwrap()
    }

    /// Every duration passed to `sleep`, in call order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockEnv for MockClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
    }
}

/// Console that captures printed lines instead of writing them
#[derive(Debug, Clone, Default)]
pub struct MockConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines printed so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Everything printed so far, newline terminated, like captured stdout
    pub fn output(&self) -> String {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Return captured output and reset the buffer
    pub fn take_output(&self) -> String {
        let output = self.output();
        self.lines.lock().unwrap().clear();
        output
    }
}

impl ConsoleEnv for MockConsole {
    fn print(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_file_env_missing_file() {
        let env = MockFileEnv::new();
        let err = env.read_to_string(Path::new("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_mock_file_env_write_error() {
        let env = MockFileEnv::new();
        env.add_file("locked.txt", "data");
        env.set_write_error("locked.txt", "read-only");

        let err = env.write(Path::new("locked.txt"), "new").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
        assert_eq!(env.file("locked.txt").as_deref(), Some("data"));
    }

    #[test]
    fn test_mock_var_env_set_and_remove() {
        let env = MockVarEnv::new().with_var("MY_VAR", "true");
        assert_eq!(env.var("MY_VAR").as_deref(), Some("true"));

        env.remove("MY_VAR");
        assert_eq!(env.var("MY_VAR"), None);
    }

    #[test]
    fn test_mock_clock_sleep_is_virtual() {
        let clock = MockClock::new();
        let before = clock.now();

        clock.sleep(Duration::from_secs(3));

        assert_eq!(clock.now().duration_since(before), Duration::from_secs(3));
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(3)]);
        assert_eq!(clock.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn test_mock_console_take_output_resets() {
        let console = MockConsole::new();
        console.print("first");
        console.print("second");

        assert_eq!(console.take_output(), "first\nsecond\n");
        assert!(console.lines().is_empty());
    }
}
