//! Environment trait definitions for dependency injection and testing
//!
//! Every side effect the showcase functions perform goes through one of these
//! traits, so tests can substitute in-memory implementations instead of
//! patching behavior at runtime.

use std::path::Path;
use std::time::{Duration, Instant};

/// File system operations trait
///
/// # Examples
///
/// ```
/// use fixture_showcase::env::FileEnv;
/// use std::path::Path;
///
/// fn read_input<E: FileEnv + ?Sized>(env: &E, path: &Path) -> Result<String, std::io::Error> {
///     env.read_to_string(path)
/// }
/// ```
pub trait FileEnv: Send + Sync {
    /// Read a file's contents as a string
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Write a string to a file, replacing its contents
    fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;
}

/// Process environment variable lookup
pub trait VarEnv: Send + Sync {
    /// Value of the variable, or `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;
}

/// Wall clock and blocking sleep
///
/// The orchestrator measures elapsed time with `now` and the arithmetic
/// engine blocks with `sleep`; a mock clock makes both deterministic.
pub trait ClockEnv: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration);
}

/// Plain standard-output messages
pub trait ConsoleEnv: Send + Sync {
    /// Print one line
    fn print(&self, line: &str);
}
