//! Mock arithmetic engine for testing
//!
//! Individual operations can be replaced with closures; anything not replaced
//! is forwarded to a wrapped engine (a default [`Calculator`] unless
//! configured). Every call is recorded.

use crate::error::Result;
use crate::math::{Arithmetic, Calculator};
use std::sync::{Arc, Mutex};

type BinaryOp = Box<dyn Fn(i64, i64) -> Result<i64> + Send + Sync>;
type SlowOp = Box<dyn Fn() + Send + Sync>;

/// One recorded engine call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticCall {
    Add(i64, i64),
    Divide(i64, i64),
    Multiply(i64, i64),
    Slow,
}

/// Builder for creating configured mock engines
pub struct MockArithmeticBuilder {
    inner: Box<dyn Arithmetic + Send + Sync>,
    add: Option<BinaryOp>,
    divide: Option<BinaryOp>,
    multiply: Option<BinaryOp>,
    slow: Option<SlowOp>,
}

impl Default for MockArithmeticBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockArithmeticBuilder {
    pub fn new() -> Self {
        Self {
            inner: Box::new(Calculator::default()),
            add: None,
            divide: None,
            multiply: None,
            slow: None,
        }
    }

    /// Forward operations that are not replaced to `engine`
    pub fn wrapping(mut self, engine: impl Arithmetic + Send + Sync + 'static) -> Self {
        self.inner = Box::new(engine);
        self
    }

    pub fn with_add(mut self, op: impl Fn(i64, i64) -> Result<i64> + Send + Sync + 'static) -> Self {
        self.add = Some(Box::new(op));
        self
    }

    pub fn with_divide(
        mut self,
        op: impl Fn(i64, i64) -> Result<i64> + Send + Sync + 'static,
    ) -> Self {
        self.divide = Some(Box::new(op));
        self
    }

    pub fn with_multiply(
        mut self,
        op: impl Fn(i64, i64) -> Result<i64> + Send + Sync + 'static,
    ) -> Self {
        self.multiply = Some(Box::new(op));
        self
    }

    pub fn with_slow(mut self, op: impl Fn() + Send + Sync + 'static) -> Self {
        self.slow = Some(Box::new(op));
        self
    }

    pub fn build(self) -> MockArithmetic {
        MockArithmetic {
            inner: self.inner,
            add: self.add,
            divide: self.divide,
            multiply: self.multiply,
            slow: self.slow,
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock arithmetic engine
pub struct MockArithmetic {
    inner: Box<dyn Arithmetic + Send + Sync>,
    add: Option<BinaryOp>,
    divide: Option<BinaryOp>,
    multiply: Option<BinaryOp>,
    slow: Option<SlowOp>,
    call_history: Arc<Mutex<Vec<ArithmeticCall>>>,
}

impl MockArithmetic {
    pub fn builder() -> MockArithmeticBuilder {
        MockArithmeticBuilder::new()
    }

    pub fn calls(&self) -> Vec<ArithmeticCall> {
        self.call_history.lock().unwrap().clone()
    }

    pub fn was_called(&self, call: ArithmeticCall) -> bool {
        self.call_history.lock().unwrap().contains(&call)
    }

    fn record(&self, call: ArithmeticCall) {
        self.call_history.lock().unwrap().push(call);
    }
}

impl Arithmetic for MockArithmetic {
    fn add(&self, first: i64, second: i64) -> Result<i64> {
        self.record(ArithmeticCall::Add(first, second));
        match &self.add {
            Some(op) => op(first, second),
            None => self.inner.add(first, second),
        }
    }

    fn divide(&self, first: i64, second: i64) -> Result<i64> {
        self.record(ArithmeticCall::Divide(first, second));
        match &self.divide {
            Some(op) => op(first, second),
            None => self.inner.divide(first, second),
        }
    }

    fn multiply(&self, first: i64, second: i64) -> Result<i64> {
        self.record(ArithmeticCall::Multiply(first, second));
        match &self.multiply {
            Some(op) => op(first, second),
            None => self.inner.multiply(first, second),
        }
    }

    fn slow(&self) {
        self.record(ArithmeticCall::Slow);
        match &self.slow {
            Some(op) => op(),
            None => self.inner.slow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::math::ArithmeticConfig;

    #[test]
    fn test_replaced_operation() {
        let mock = MockArithmetic::builder()
            .with_multiply(|_, _| Ok(2))
            .with_slow(|| {})
            .build();

        assert_eq!(mock.multiply(10, 10).unwrap(), 2);
        assert_eq!(mock.add(10, 10).unwrap(), 20);
    }

    #[test]
    fn test_wrapped_engine_keeps_its_config() {
        let mock = MockArithmetic::builder()
            .wrapping(Calculator::new(ArithmeticConfig::new(3, 4)))
            .build();

        assert_eq!(mock.add(1, 2).unwrap(), 9);
        assert_eq!(mock.multiply(1, 2).unwrap(), 6);
    }

    #[test]
    fn test_injected_failure() {
        let mock = MockArithmetic::builder()
            .with_divide(|_, _| Err(Error::DivisionByZero))
            .build();
        assert!(mock.divide(4, 2).is_err());
    }

    #[test]
    fn test_call_history() {
        let mock = MockArithmetic::builder().with_slow(|| {}).build();
        mock.add(1, 2).unwrap();
        mock.slow();

        assert_eq!(
            mock.calls(),
            vec![ArithmeticCall::Add(1, 2), ArithmeticCall::Slow]
        );
        assert!(mock.was_called(ArithmeticCall::Slow));
        assert!(!mock.was_called(ArithmeticCall::Divide(1, 2)));
    }
}
