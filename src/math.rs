//! Arithmetic engine
//!
//! `Calculator` is the default implementation of [`Arithmetic`]. Callers that
//! need different behavior (a faster `slow`, a fixed `multiply`) pass their own
//! implementation to the orchestrator instead of patching this one.

use crate::env::{AppEnv, ClockEnv, ConsoleEnv, RealClock, RealConsole};
use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// How long `slow` blocks unless configured otherwise
pub const DEFAULT_SLEEP: Duration = Duration::from_secs(3);

/// Per-instance parameters of the arithmetic engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticConfig {
    /// Applied to the sum in `add`
    pub multiplier: i64,
    /// Added to the product in `multiply`
    pub offset: i64,
}

impl ArithmeticConfig {
    pub fn new(multiplier: i64, offset: i64) -> Self {
        Self { multiplier, offset }
    }

    pub fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// True when both parameters have their identity values
    pub fn is_identity(&self) -> bool {
        self.multiplier == 1 && self.offset == 0
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            multiplier: 1,
            offset: 0,
        }
    }
}

/// Operations the orchestrator composes
pub trait Arithmetic {
    /// `(first + second) * multiplier`
    fn add(&self, first: i64, second: i64) -> Result<i64>;

    /// Floor division, rounding toward negative infinity
    fn divide(&self, first: i64, second: i64) -> Result<i64>;

    /// `first * second + offset`
    fn multiply(&self, first: i64, second: i64) -> Result<i64>;

    /// Simulated latency
    fn slow(&self);
}

/// Integer division rounding toward negative infinity
pub fn floor_div(first: i64, second: i64) -> Result<i64> {
    if second == 0 {
        return Err(Error::DivisionByZero);
    }
    let quotient = first
        .checked_div(second)
        .ok_or_else(|| Error::overflow("divide"))?;
    if first % second != 0 && ((first < 0) != (second < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Default arithmetic engine
pub struct Calculator {
    config: ArithmeticConfig,
    sleep: Duration,
    clock: Arc<dyn ClockEnv>,
    console: Arc<dyn ConsoleEnv>,
}

impl Calculator {
    /// Engine backed by the real clock and stdout
    pub fn new(config: ArithmeticConfig) -> Self {
        Self {
            config,
            sleep: DEFAULT_SLEEP,
            clock: Arc::new(RealClock::new()),
            console: Arc::new(RealConsole::new()),
        }
    }

    /// Engine that sleeps and prints through `env`
    pub fn with_env(config: ArithmeticConfig, env: &AppEnv) -> Self {
        Self {
            config,
            sleep: DEFAULT_SLEEP,
            clock: env.clock.clone(),
            console: env.console.clone(),
        }
    }

    pub fn with_sleep(mut self, sleep: Duration) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn config(&self) -> ArithmeticConfig {
        self.config
    }

    pub fn sleep(&self) -> Duration {
        self.sleep
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(ArithmeticConfig::default())
    }
}

impl Arithmetic for Calculator {
    fn add(&self, first: i64, second: i64) -> Result<i64> {
        first
            .checked_add(second)
            .and_then(|sum| sum.checked_mul(self.config.multiplier))
            .ok_or_else(|| Error::overflow("add"))
    }

    fn divide(&self, first: i64, second: i64) -> Result<i64> {
        floor_div(first, second)
    }

    fn multiply(&self, first: i64, second: i64) -> Result<i64> {
        first
            .checked_mul(second)
            .and_then(|product| product.checked_add(self.config.offset))
            .ok_or_else(|| Error::overflow("multiply"))
    }

    fn slow(&self) {
        self.console
            .print(&format!("SLEEPING {} seconds!", self.sleep.as_secs_f64()));
        self.clock.sleep(self.sleep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MockClock, MockConsole};

    fn mock_calculator(config: ArithmeticConfig) -> (Calculator, MockClock, MockConsole) {
        let clock = MockClock::new();
        let console = MockConsole::new();
        let env = AppEnv::mock()
            .with_clock(Arc::new(clock.clone()))
            .with_console(Arc::new(console.clone()));
        (Calculator::with_env(config, &env), clock, console)
    }

    #[test]
    fn test_default_config_is_identity() {
        let config = ArithmeticConfig::default();
        assert_eq!(config, ArithmeticConfig::new(1, 0));
        assert!(config.is_identity());
        assert!(!config.with_offset(4).is_identity());
    }

    #[test]
    fn test_add_applies_multiplier() {
        let (calc, _, _) = mock_calculator(ArithmeticConfig::default().with_multiplier(3));
        assert_eq!(calc.add(1, 2).unwrap(), 9);
    }

    #[test]
    fn test_multiply_applies_offset() {
        let (calc, _, _) = mock_calculator(ArithmeticConfig::default().with_offset(4));
        assert_eq!(calc.multiply(1, 2).unwrap(), 6);
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7, 3).unwrap(), 2);
        assert_eq!(floor_div(-7, 3).unwrap(), -3);
        assert_eq!(floor_div(7, -3).unwrap(), -3);
        assert_eq!(floor_div(-5, -3).unwrap(), 1);
        assert_eq!(floor_div(1, 2).unwrap(), 0);
        assert_eq!(floor_div(-1, 2).unwrap(), -1);
        assert_eq!(floor_div(6, -3).unwrap(), -2);
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::default();
        assert!(matches!(calc.divide(1, 0), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_overflow_is_reported() {
        let calc = Calculator::default();
        assert!(matches!(
            calc.add(i64::MAX, 1),
            Err(Error::Overflow { operation: "add" })
        ));
        assert!(matches!(
            calc.multiply(i64::MAX, 2),
            Err(Error::Overflow {
                operation: "multiply"
            })
        ));
        assert!(matches!(
            calc.divide(i64::MIN, -1),
            Err(Error::Overflow { operation: "divide" })
        ));
    }

    #[test]
    fn test_slow_prints_then_sleeps() {
        let (calc, clock, console) = mock_calculator(ArithmeticConfig::default());

        calc.slow();

        assert_eq!(console.lines(), vec!["SLEEPING 3 seconds!".to_string()]);
        assert_eq!(clock.sleeps(), vec![DEFAULT_SLEEP]);
    }

    #[test]
    fn test_slow_reports_fractional_sleep() {
        let (calc, clock, console) = mock_calculator(ArithmeticConfig::default());
        let calc = calc.with_sleep(Duration::from_millis(40));

        calc.slow();

        assert_eq!(console.lines(), vec!["SLEEPING 0.04 seconds!".to_string()]);
        assert_eq!(clock.elapsed(), Duration::from_millis(40));
    }
}
