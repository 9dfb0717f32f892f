//! Describes the `MY_VAR` environment variable.

use crate::env::{RealVarEnv, VarEnv};

pub const VAR_NAME: &str = "MY_VAR";
pub const SET_MESSAGE: &str = "MY_VAR is set to 'true'";
pub const NOT_SET_MESSAGE: &str = "MY_VAR is not set to 'true'";

/// Probe the real process environment
pub fn environment_var_function() -> &'static str {
    describe_my_var(&RealVarEnv::new())
}

/// Only the exact value `true` counts; `TRUE`, `1` and unset all do not.
pub fn describe_my_var<E: VarEnv + ?Sized>(vars: &E) -> &'static str {
    match vars.var(VAR_NAME).as_deref() {
        Some("true") => SET_MESSAGE,
        _ => NOT_SET_MESSAGE,
    }
}
