//! Combined application environment
//!
//! Provides a unified environment type that combines all I/O capabilities.

use super::mock::{MockClock, MockConsole, MockFileEnv, MockVarEnv};
use super::real::{RealClock, RealConsole, RealFileEnv, RealVarEnv};
use super::traits::{ClockEnv, ConsoleEnv, FileEnv, VarEnv};
use std::sync::Arc;

/// Combined application environment
///
/// Provides access to all I/O capabilities (file system, environment
/// variables, clock, console). Can be constructed with real or mock
/// implementations for testing.
///
/// # Examples
///
/// ```
/// use fixture_showcase::env::AppEnv;
///
/// // Create real environment for production use
/// let env = AppEnv::real();
///
/// // Create mock environment for testing
/// let test_env = AppEnv::mock();
/// ```
#[derive(Clone)]
pub struct AppEnv {
    pub fs: Arc<dyn FileEnv>,
    pub vars: Arc<dyn VarEnv>,
    pub clock: Arc<dyn ClockEnv>,
    pub console: Arc<dyn ConsoleEnv>,
}

impl AppEnv {
    /// Create an environment with real implementations
    pub fn real() -> Self {
        Self {
            fs: Arc::new(RealFileEnv::new()),
            vars: Arc::new(RealVarEnv::new()),
            clock: Arc::new(RealClock::new()),
            console: Arc::new(RealConsole::new()),
        }
    }

    /// Create an environment with mock implementations
    ///
    /// Use this in tests to avoid actual I/O operations.
    pub fn mock() -> Self {
        Self {
            fs: Arc::new(MockFileEnv::new()),
            vars: Arc::new(MockVarEnv::new()),
            clock: Arc::new(MockClock::new()),
            console: Arc::new(MockConsole::new()),
        }
    }

    /// Create a custom environment with specific implementations
    pub fn custom(
        fs: Arc<dyn FileEnv>,
        vars: Arc<dyn VarEnv>,
        clock: Arc<dyn ClockEnv>,
        console: Arc<dyn ConsoleEnv>,
    ) -> Self {
        Self {
            fs,
            vars,
            clock,
            console,
        }
    }

    /// Replace the clock, keeping every other capability
    pub fn with_clock(mut self, clock: Arc<dyn ClockEnv>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the console, keeping every other capability
    pub fn with_console(mut self, console: Arc<dyn ConsoleEnv>) -> Self {
        self.console = console;
        self
    }
}

impl Default for AppEnv {
    fn default() -> Self {
        Self::real()
    }
}
