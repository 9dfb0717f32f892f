//! Error handling utilities
//!
//! This module provides centralized error handling for the binary.

use crate::error::Error;
use tracing::error;

/// Exit code for invalid configuration or arguments
pub const ARGUMENT_ERROR: i32 = 2;
/// Exit code for everything else
pub const GENERAL_ERROR: i32 = 1;

/// Exit status for an error surfaced by the binary
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Config(_)) | Some(Error::Toml(_)) => ARGUMENT_ERROR,
        _ => GENERAL_ERROR,
    }
}

/// Handle fatal errors and exit with appropriate status code
///
/// # Verbose Mode Behavior
/// - `verbose = 0`: The top-level message only
/// - `verbose >= 1`: Includes the full error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    eprintln!("Error: {error}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_argument_errors() {
        let err = anyhow::Error::new(Error::Config("bad".to_string()));
        assert_eq!(exit_code(&err), ARGUMENT_ERROR);
    }

    #[test]
    fn test_runtime_errors_are_general() {
        let err = anyhow::Error::new(Error::alas()).context("running error command");
        assert_eq!(exit_code(&err), GENERAL_ERROR);
        assert_eq!(exit_code(&anyhow::anyhow!("plain")), GENERAL_ERROR);
    }
}
