//! Log capture fixture
//!
//! Installs a thread-local `tracing` subscriber that writes plain text into a
//! shared buffer. Dropping the capture restores the previous subscriber.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Captured `tracing` output for the current thread
///
/// # Example
///
/// ```
/// use fixture_showcase::testing::fixtures::LogCapture;
///
/// let capture = LogCapture::new();
/// tracing::warn!("warning message!");
/// tracing::info!("info message!");
///
/// assert!(capture.contains("warning message!"));
/// assert!(!capture.contains("info message!"));
/// ```
pub struct LogCapture {
    buffer: SharedBuffer,
    level: Level,
    _guard: DefaultGuard,
}

impl LogCapture {
    /// Capture at `WARN`, the level the showcase logs at by default
    pub fn new() -> Self {
        Self::at(Level::WARN)
    }

    /// Capture every record at `level` or more severe
    pub fn at(level: Level) -> Self {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        Self {
            buffer,
            level,
            _guard: guard,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Everything captured so far
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.0.lock().unwrap()).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }

    /// Captured lines that mention `level`, e.g. `"WARN"`
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.text()
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(level))
            .map(str::to_string)
            .collect()
    }

    pub fn clear(&self) {
        self.buffer.0.lock().unwrap().clear();
    }
}

impl Default for LogCapture {
    fn default() -> Self {
        Self::new()
    }
}
