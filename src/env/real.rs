//! Real environment implementations that interact with the actual system
//!
//! These implementations are used in production code and perform actual I/O operations.

use super::traits::{ClockEnv, ConsoleEnv, FileEnv, VarEnv};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Real file system implementation
///
/// Delegates all operations to the standard library's `std::fs` module.
#[derive(Debug, Clone, Default)]
pub struct RealFileEnv;

impl RealFileEnv {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnv for RealFileEnv {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Reads the process environment via `std::env::var`.
#[derive(Debug, Clone, Default)]
pub struct RealVarEnv;

impl RealVarEnv {
    pub fn new() -> Self {
        Self
    }
}

impl VarEnv for RealVarEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Real clock implementation
///
/// `sleep` genuinely blocks the current thread.
#[derive(Debug, Clone, Default)]
pub struct RealClock;

impl RealClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockEnv for RealClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Writes lines to the process's standard output.
#[derive(Debug, Clone, Default)]
pub struct RealConsole;

impl RealConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleEnv for RealConsole {
    fn print(&self, line: &str) {
        println!("{line}");
    }
}
