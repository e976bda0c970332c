//! Error types for rollspell.
//!
//! Index construction and dictionary loading are the only fallible
//! operations; distance computation and lookups are total.

use std::io;

use thiserror::Error;

/// The error type for rollspell operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// A caller passed an argument with no defined meaning, such as a
    /// fingerprint window of zero characters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors while reading a dictionary source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SpellError {
    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpellError::invalid_argument("window size must be at least 1");
        assert_eq!(err.to_string(), "Invalid argument: window size must be at least 1");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: SpellError = io_err.into();
        assert!(matches!(err, SpellError::Io(_)));
    }
}
