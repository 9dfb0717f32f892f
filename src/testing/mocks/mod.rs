//! Mock implementations for testing
//!
//! Environment mocks (files, variables, clock, console) live in
//! `crate::env`; this module holds mocks of the crate's own seams.

pub mod arithmetic;

pub use arithmetic::{ArithmeticCall, MockArithmetic, MockArithmeticBuilder};
