//! Application configuration
//!
//! Settings that only the binary needs: verbosity and the log filter.

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Explicit log filter, taking precedence over `verbose`
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            log_level: None,
        }
    }

    /// Use `level` instead of the verbosity-derived filter
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        self.log_level = level;
        self
    }

    /// Get the log filter based on the override or verbosity
    ///
    /// Without `-v` only warnings and errors are shown.
    pub fn log_level(&self) -> String {
        if let Some(level) = &self.log_level {
            return level.to_lowercase();
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }
}
