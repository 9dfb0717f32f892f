use thiserror::Error;

/// Message carried by the error trigger.
pub const ALAS_MESSAGE: &str = "Alas, there is an error!";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Runtime(String),

    #[error("integer division or modulo by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// The fixed runtime error raised on request
    pub fn alas() -> Self {
        Error::Runtime(ALAS_MESSAGE.to_string())
    }

    pub fn overflow(operation: &'static str) -> Self {
        Error::Overflow { operation }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Runtime(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
