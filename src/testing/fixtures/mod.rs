//! Test fixtures
//!
//! Plain functions and RAII guards that tests call at the top of their body.
//! Setup runs in the constructor, teardown in `Drop`.

pub mod capture;
pub mod isolation;
pub mod timing;

pub use capture::LogCapture;
pub use isolation::EnvVarGuard;
pub use timing::{speedup, speedup_settings, TestTimer};

use crate::math::{Arithmetic, ArithmeticConfig, Calculator};
use crate::testing::mocks::MockArithmetic;

/// Common engine fixtures
pub struct Fixtures;

impl Fixtures {
    /// A calculator with identity configuration and an instant `slow`
    pub fn instant_calculator() -> MockArithmetic {
        MockArithmetic::builder()
            .wrapping(Calculator::new(ArithmeticConfig::default()))
            .with_slow(|| {})
            .build()
    }

    /// An engine whose `multiply` always returns 2 and whose `slow` does nothing
    pub fn constant_multiply() -> MockArithmetic {
        MockArithmetic::builder()
            .with_slow(|| {})
            .with_multiply(|_, _| Ok(2))
            .build()
    }

    /// Parameter sets generated at runtime rather than listed literally
    pub fn generated_params() -> Vec<(i64, i64, i64)> {
        let mut first: Vec<i64> = (2..=3).rev().collect();
        first.push(5);
        let mut second: Vec<i64> = (5..=6).rev().collect();
        second.push(11);
        vec![
            (first[0], first[1], first[2]),
            (second[0], second[1], second[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_calculator_uses_real_arithmetic() {
        let engine = Fixtures::instant_calculator();
        assert_eq!(engine.add(2, 1).unwrap(), 3);
        assert_eq!(engine.divide(-5, -3).unwrap(), 1);
        engine.slow();
    }

    #[test]
    fn test_generated_params() {
        assert_eq!(Fixtures::generated_params(), vec![(3, 2, 5), (6, 5, 11)]);
    }
}
