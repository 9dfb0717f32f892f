//! Environment abstraction layer for dependency injection and testing
//!
//! This module provides trait-based abstractions for every side effect in the
//! crate, enabling:
//! - Substituting behavior in tests through constructors instead of patching
//! - Deterministic timing through a virtual clock
//! - Capturing console output without touching the real stdout
//!
//! # Architecture
//!
//! - **Traits**: Define capabilities (FileEnv, VarEnv, ClockEnv, ConsoleEnv)
//! - **Real Implementations**: Actual I/O operations for production use
//! - **Mock Implementations**: In-memory operations for testing
//! - **Combined Environment**: AppEnv bundles all capabilities together
//!
//! # Testing
//!
//! ```
//! use fixture_showcase::env::{AppEnv, MockFileEnv, MockVarEnv, MockClock, MockConsole};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let mock_fs = MockFileEnv::new();
//! mock_fs.add_file("infile.txt", "test data");
//!
//! let env = AppEnv::custom(
//!     Arc::new(mock_fs),
//!     Arc::new(MockVarEnv::new()),
//!     Arc::new(MockClock::new()),
//!     Arc::new(MockConsole::new()),
//! );
//!
//! let content = env.fs.read_to_string(Path::new("infile.txt")).unwrap();
//! assert_eq!(content, "test data");
//! ```

mod app;
mod mock;
mod real;
mod traits;

pub use app::AppEnv;
pub use mock::{MockClock, MockConsole, MockFileEnv, MockVarEnv};
pub use real::{RealClock, RealConsole, RealFileEnv, RealVarEnv};
pub use traits::{ClockEnv, ConsoleEnv, FileEnv, VarEnv};
