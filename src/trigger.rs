use crate::error::{Error, Result};

/// Fail with the fixed runtime error when `raise_error` is set, otherwise `Ok(true)`
pub fn error_function(raise_error: bool) -> Result<bool> {
    if raise_error {
        return Err(Error::alas());
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raises_when_asked() {
        let err = error_function(true).unwrap_err();
        assert!(matches!(err, Error::Runtime(_)));
        assert_eq!(err.to_string(), "Alas, there is an error!");
    }

    #[test]
    fn test_returns_true_otherwise() {
        assert!(error_function(false).unwrap());
    }
}
