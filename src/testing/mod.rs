//! Testing utilities and fixtures
//!
//! This module provides test helpers, fixtures, and mocks used by the unit
//! tests and the integration tests under `tests/`.

pub mod fixtures;
pub mod helpers;
pub mod mocks;

use crate::env::{AppEnv, MockClock, MockConsole, MockVarEnv, RealFileEnv};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test context containing a temporary directory and a mostly mocked environment
///
/// Files are real (inside the temporary directory); variables, clock and
/// console are in-memory, with handles kept here for inspection.
pub struct TestContext {
    /// Environment wired to the handles below
    pub env: AppEnv,
    /// Virtual clock
    pub clock: MockClock,
    /// Captured console output
    pub console: MockConsole,
    /// In-memory environment variables
    pub vars: MockVarEnv,
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with default mocks
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let clock = MockClock::new();
        let console = MockConsole::new();
        let vars = MockVarEnv::new();

        let env = AppEnv::custom(
            Arc::new(RealFileEnv::new()),
            Arc::new(vars.clone()),
            Arc::new(clock.clone()),
            Arc::new(console.clone()),
        );

        Ok(Self {
            env,
            clock,
            console,
            vars,
            temp_dir,
        })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a test file in the temporary directory
    pub fn create_test_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        helpers::create_file(self.temp_dir.path(), name, content)
    }

    /// Read a file from the temporary directory
    pub fn read_test_file(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.temp_dir.path().join(name))?)
    }
}
