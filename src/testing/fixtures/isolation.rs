//! Process environment isolation fixture
//!
//! `EnvVarGuard` uses the RAII pattern so variables are restored even when a
//! test panics. The process environment is shared by every test thread, so
//! tests using it must also be serialized (`#[serial]`). Prefer
//! `MockVarEnv` where the code under test accepts a `VarEnv`.

use std::collections::HashMap;
use std::ffi::OsString;

/// Sets or removes environment variables and restores them on drop
///
/// # Example
///
/// ```
/// use fixture_showcase::testing::fixtures::EnvVarGuard;
///
/// {
///     let mut guard = EnvVarGuard::new();
///     guard.set("SHOWCASE_DOC_EXAMPLE", "true");
///     assert_eq!(std::env::var("SHOWCASE_DOC_EXAMPLE").as_deref(), Ok("true"));
/// }
///
/// // Original value (unset) restored
/// assert!(std::env::var("SHOWCASE_DOC_EXAMPLE").is_err());
/// ```
#[derive(Default)]
pub struct EnvVarGuard {
    saved: HashMap<String, Option<OsString>>,
}

impl EnvVarGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` for the lifetime of the guard
    pub fn set(&mut self, key: &str, value: &str) {
        self.save(key);
        std::env::set_var(key, value);
    }

    /// Remove `key` for the lifetime of the guard; absent keys are fine
    pub fn remove(&mut self, key: &str) {
        self.save(key);
        std::env::remove_var(key);
    }

    // First call wins so drop restores the value from before the guard.
    fn save(&mut self, key: &str) {
        self.saved
            .entry(key.to_string())
            .or_insert_with(|| std::env::var_os(key));
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain() {
            match original {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}
