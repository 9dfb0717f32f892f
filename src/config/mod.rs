//! Showcase configuration
//!
//! Values are layered, lowest to highest priority:
//!
//! 1. **Defaults** - Hardcoded default values
//! 2. **Config file** - an optional TOML file
//! 3. **Environment variables** - `SHOWCASE_*` prefix
//!
//! CLI flags are applied on top by the binary.
//!
//! # Example
//!
//! ```
//! use fixture_showcase::config::ShowcaseConfig;
//!
//! let config = ShowcaseConfig::from_toml_str("sleep_secs = 0.5\ndebug_mode = true").unwrap();
//! assert_eq!(config.sleep_secs, 0.5);
//! assert_eq!(config.threshold_secs, 2.0);
//! assert!(config.debug_mode);
//! ```

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{Error, Result};
use crate::orchestrator::{MathSettings, Recipe};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prefix of every configuration environment variable.
pub const ENV_PREFIX: &str = "SHOWCASE_";

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// How long the arithmetic engine's `slow` blocks, in seconds.
    #[serde(default = "default_sleep_secs")]
    pub sleep_secs: f64,

    /// Elapsed time above which diagnostics are emitted, in seconds.
    #[serde(default = "default_threshold_secs")]
    pub threshold_secs: f64,

    /// Emit the extra debug-level record.
    #[serde(default)]
    pub debug_mode: bool,

    /// How the orchestrator composes the arithmetic operations.
    #[serde(default)]
    pub recipe: Recipe,

    /// Overrides the verbosity-derived log filter.
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_sleep_secs() -> f64 {
    3.0
}

fn default_threshold_secs() -> f64 {
    2.0
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            sleep_secs: default_sleep_secs(),
            threshold_secs: default_threshold_secs(),
            debug_mode: false,
            recipe: Recipe::default(),
            log_level: None,
        }
    }
}

impl ShowcaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        seconds("sleep_secs", self.sleep_secs)?;
        seconds("threshold_secs", self.threshold_secs)?;

        if let Some(level) = &self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(Error::Config(format!(
                    "log_level must be one of {}, got '{}'",
                    VALID_LOG_LEVELS.join(", "),
                    level
                )));
            }
        }

        Ok(())
    }

    /// Convert into the explicit parameters the orchestrator takes
    pub fn settings(&self) -> Result<MathSettings> {
        Ok(MathSettings {
            sleep: seconds("sleep_secs", self.sleep_secs)?,
            threshold: seconds("threshold_secs", self.threshold_secs)?,
            debug_mode: self.debug_mode,
            recipe: self.recipe,
        })
    }
}

fn seconds(field: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| {
        Error::Config(format!(
            "{field} must be a finite, non-negative number of seconds, got {value}"
        ))
    })
}
