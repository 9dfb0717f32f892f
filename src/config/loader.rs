use super::{ShowcaseConfig, ENV_PREFIX};
use crate::env::{FileEnv, VarEnv};
use crate::error::{Error, Result};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Loads `ShowcaseConfig` through injected file and variable capabilities.
pub struct ConfigLoader {
    fs: Arc<dyn FileEnv>,
    vars: Arc<dyn VarEnv>,
}

impl ConfigLoader {
    pub fn new(fs: Arc<dyn FileEnv>, vars: Arc<dyn VarEnv>) -> Self {
        Self { fs, vars }
    }

    /// Defaults, then the optional file, then `SHOWCASE_*` variables
    pub fn load(&self, path: Option<&Path>) -> Result<ShowcaseConfig> {
        let mut config = match path {
            Some(path) => self.load_file(path)?,
            None => ShowcaseConfig::default(),
        };

        self.merge_env_vars(&mut config)?;
        config.validate()?;

        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    pub fn load_file(&self, path: &Path) -> Result<ShowcaseConfig> {
        if !self.fs.exists(path) {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = self.fs.read_to_string(path)?;
        ShowcaseConfig::from_toml_str(&content)
    }

    pub fn merge_env_vars(&self, config: &mut ShowcaseConfig) -> Result<()> {
        if let Some(sleep) = self.parsed::<f64>("SLEEP_SECS")? {
            config.sleep_secs = sleep;
        }

        if let Some(threshold) = self.parsed::<f64>("THRESHOLD_SECS")? {
            config.threshold_secs = threshold;
        }

        if let Some(raw) = self.var("DEBUG_MODE") {
            config.debug_mode = parse_flag(&raw).ok_or_else(|| {
                Error::Config(format!("{ENV_PREFIX}DEBUG_MODE is not a boolean: '{raw}'"))
            })?;
        }

        if let Some(recipe) = self.parsed("RECIPE")? {
            config.recipe = recipe;
        }

        if let Some(log_level) = self.var("LOG_LEVEL") {
            config.log_level = Some(log_level);
        }

        Ok(())
    }

    fn var(&self, suffix: &str) -> Option<String> {
        self.vars.var(&format!("{ENV_PREFIX}{suffix}"))
    }

    fn parsed<T>(&self, suffix: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.var(suffix)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|e| {
                    Error::Config(format!("{ENV_PREFIX}{suffix}='{raw}' is invalid: {e}"))
                })
            })
            .transpose()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
