//! Custom test assertions
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use regex::Regex;
use std::fmt::Display;
use std::path::Path;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {{
        match $result {
            Ok(val) => val,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    }};
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {{
        match $result {
            Ok(val) => panic!("Expected Err, got Ok: {:?}", val),
            Err(e) => e,
        }
    }};
}

/// Assert that an error message contains a specific string
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {{
        let err = $crate::assert_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($substring),
            "Error '{}' does not contain '{}'",
            err_str,
            $substring
        );
    }};
}

/// Assert that an error's message matches a regex anywhere in the text
///
/// Returns an error only when `pattern` itself is not a valid regex.
pub fn assert_error_matches(error: &impl Display, pattern: &str) -> Result<()> {
    let message = error.to_string();
    let re = Regex::new(pattern)?;
    assert!(
        re.is_match(&message),
        "Error '{}' does not match pattern '{}'",
        message,
        pattern
    );
    Ok(())
}

/// Assert that a file exists
pub fn assert_file_exists(path: &Path) {
    assert!(
        path.exists() && path.is_file(),
        "File does not exist: {:?}",
        path
    );
}

/// Assert that a file's whole content equals `expected`
pub fn assert_file_content(path: &Path, expected: &str) -> Result<()> {
    assert_file_exists(path);
    let content = std::fs::read_to_string(path)?;
    assert_eq!(
        content, expected,
        "File {:?} does not have the expected content",
        path
    );
    Ok(())
}

/// Assert that a float is approximately equal to another
pub fn assert_approx_eq(a: f64, b: f64, epsilon: f64) {
    let diff = (a - b).abs();
    assert!(
        diff <= epsilon,
        "Values {} and {} differ by {} (max allowed: {})",
        a,
        b,
        diff,
        epsilon
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_assert_error_matches() {
        let err = Error::alas();
        assert_error_matches(&err, "Alas, there is an error!").unwrap();
        assert_error_matches(&err, "Alas.*there.*error!").unwrap();
    }

    #[test]
    #[should_panic(expected = "does not match pattern")]
    fn test_assert_error_matches_panic() {
        assert_error_matches(&Error::DivisionByZero, "^Alas").unwrap();
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(assert_error_matches(&Error::alas(), "(unclosed").is_err());
    }

    #[test]
    fn test_assert_file_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        std::fs::write(&file_path, "Hello, world!").unwrap();

        assert_file_content(&file_path, "Hello, world!").unwrap();
    }

    #[test]
    #[should_panic(expected = "File does not exist")]
    fn test_assert_file_exists_panic() {
        assert_file_exists(Path::new("/nonexistent/file.txt"));
    }

    #[test]
    fn test_result_macros() {
        let ok: std::result::Result<i32, String> = Ok(3);
        assert_eq!(crate::assert_ok!(ok), 3);

        let err: std::result::Result<i32, String> = Err("boom".to_string());
        assert_eq!(crate::assert_err!(err), "boom");

        crate::assert_error_contains!(crate::trigger::error_function(true), "there is");
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(3.0, 3.0000001, 1e-6);
    }
}
