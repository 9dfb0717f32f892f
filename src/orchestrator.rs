//! The orchestrator function
//!
//! Composes the arithmetic engine's operations around a deliberate delay and
//! emits diagnostics when the whole call took longer than a threshold. Every
//! input that used to be process-wide state (sleep duration, debug flag) is an
//! explicit field of [`MathSettings`].

use crate::env::AppEnv;
use crate::error::{Error, Result};
use crate::math::{Arithmetic, ArithmeticConfig, Calculator, DEFAULT_SLEEP};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Elapsed time above which diagnostics are emitted unless configured otherwise
pub const DEFAULT_THRESHOLD: Duration = Duration::from_secs(2);

/// How the orchestrator composes the engine's operations
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Recipe {
    /// `multiply(add(first, second), divide(first, second))`
    #[default]
    SumTimesQuotient,
    /// `add(multiply(first, second), second)`
    ProductThenSum,
}

impl Recipe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recipe::SumTimesQuotient => "sum-times-quotient",
            Recipe::ProductThenSum => "product-then-sum",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recipe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sum-times-quotient" => Ok(Recipe::SumTimesQuotient),
            "product-then-sum" => Ok(Recipe::ProductThenSum),
            other => Err(Error::Config(format!(
                "unknown recipe '{other}' (expected sum-times-quotient or product-then-sum)"
            ))),
        }
    }
}

/// Explicit parameters of one orchestrator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSettings {
    pub sleep: Duration,
    pub threshold: Duration,
    pub debug_mode: bool,
    pub recipe: Recipe,
}

impl MathSettings {
    pub fn with_sleep(mut self, sleep: Duration) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = recipe;
        self
    }
}

impl Default for MathSettings {
    fn default() -> Self {
        Self {
            sleep: DEFAULT_SLEEP,
            threshold: DEFAULT_THRESHOLD,
            debug_mode: false,
            recipe: Recipe::default(),
        }
    }
}

/// Operands and per-call options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathRequest {
    pub first: i64,
    pub second: i64,
    pub config: ArithmeticConfig,
    pub half: bool,
}

impl MathRequest {
    pub fn new(first: i64, second: i64) -> Self {
        Self {
            first,
            second,
            config: ArithmeticConfig::default(),
            half: false,
        }
    }

    pub fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.config.multiplier = multiplier;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.config.offset = offset;
        self
    }

    pub fn with_half(mut self, half: bool) -> Self {
        self.half = half;
        self
    }
}

/// Result of the orchestrator
///
/// Halving switches the representation to a fraction. Both variants compare
/// equal to plain integers and floats with the same numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    Integer(i64),
    Fraction(f64),
}

impl Solution {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Solution::Integer(value) => value as f64,
            Solution::Fraction(value) => value,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Solution::Integer(value) => Some(value),
            Solution::Fraction(_) => None,
        }
    }

    pub fn is_fraction(&self) -> bool {
        matches!(self, Solution::Fraction(_))
    }
}

impl PartialEq<i64> for Solution {
    fn eq(&self, other: &i64) -> bool {
        match *self {
            Solution::Integer(value) => value == *other,
            Solution::Fraction(value) => value == *other as f64,
        }
    }
}

impl PartialEq<f64> for Solution {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Integer(value) => write!(f, "{value}"),
            // `{:?}` keeps the trailing `.0` on whole fractions
            Solution::Fraction(value) => write!(f, "{value:?}"),
        }
    }
}

/// Run with default settings against the real clock and stdout
///
/// Blocks for the default three seconds.
pub fn some_math_function(first: i64, second: i64, half: bool) -> Result<Solution> {
    compute(
        &MathRequest::new(first, second).with_half(half),
        &MathSettings::default(),
        &AppEnv::real(),
    )
}

/// Build a [`Calculator`] from the request and run it
pub fn compute(request: &MathRequest, settings: &MathSettings, env: &AppEnv) -> Result<Solution> {
    let engine = Calculator::with_env(request.config, env).with_sleep(settings.sleep);
    compute_with(&engine, request, settings, env)
}

/// Run against a caller-supplied engine
///
/// The engine's own configuration wins over `request.config`; the request
/// only contributes its operands and the halve flag.
pub fn compute_with<A: Arithmetic + ?Sized>(
    engine: &A,
    request: &MathRequest,
    settings: &MathSettings,
    env: &AppEnv,
) -> Result<Solution> {
    let before = env.clock.now();
    let (first, second) = (request.first, request.second);

    let solution = match settings.recipe {
        Recipe::SumTimesQuotient => {
            let addition = engine.add(first, second)?;
            let division = engine.divide(first, second)?;
            engine.slow();
            engine.multiply(addition, division)?
        }
        Recipe::ProductThenSum => {
            let product = engine.multiply(first, second)?;
            engine.slow();
            engine.add(product, second)?
        }
    };

    let elapsed = env.clock.now().saturating_duration_since(before);
    if elapsed > settings.threshold {
        warn!("warning message!");
        info!("info message!");
        env.console.print("print message");
    }
    if settings.debug_mode {
        debug!("Only in debug!");
    }

    Ok(if request.half {
        Solution::Fraction(solution as f64 / 2.0)
    } else {
        Solution::Integer(solution)
    })
}
