//! # fixture-showcase
//!
//! A handful of deliberately trivial functions whose real purpose is the test
//! suite around them: fixtures, mocks, parametrized cases, captured logs and
//! stdout, and skipped or expected-to-fail tests.
//!
//! ## Usage
//!
//! ```bash
//! showcase math 2 1 [--half] [--multiplier N] [--offset N] [--sleep-secs S]
//! showcase update-file <PATH>
//! showcase probe
//! showcase error [--raise]
//! ```
//!
//! ## Modules
//!
//! - `math` - Arithmetic engine (`Arithmetic` trait, `Calculator`)
//! - `orchestrator` - Composes the engine with a delay and timing diagnostics
//! - `files` - Decorates a text file in place
//! - `trigger` - Fails with a fixed error on request
//! - `probe` - Describes the `MY_VAR` environment variable
//! - `env` - Injectable file, variable, clock and console capabilities
//! - `config` - Layered configuration (defaults, TOML, `SHOWCASE_*`)
//! - `app` - Logging and fatal error handling for the binary
//! - `testing` - Fixtures, mocks and assertions for the test suite
pub mod app;
pub mod config;
pub mod env;
pub mod error;
pub mod files;
pub mod math;
pub mod orchestrator;
pub mod probe;
pub mod trigger;

pub mod testing;

pub use error::{Error, Result};
pub use files::{update_file, update_file_via_path};
pub use math::{Arithmetic, ArithmeticConfig, Calculator};
pub use orchestrator::{
    compute, compute_with, some_math_function, MathRequest, MathSettings, Recipe, Solution,
};
pub use probe::environment_var_function;
pub use trigger::error_function;
