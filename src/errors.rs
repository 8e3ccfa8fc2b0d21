//! Error types for fizzbuzz
//!
//! The classifier itself cannot fail; everything here comes from the
//! ambient layers (writing output, loading configuration).

use thiserror::Error;

/// Main error type for the fizzbuzz library
#[derive(Error, Debug)]
pub enum FizzBuzzError {
    /// I/O errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("FizzBuzz error: {0}")]
    Generic(String),
}

/// Result type alias for fizzbuzz operations
pub type Result<T> = std::result::Result<T, FizzBuzzError>;

impl FizzBuzzError {
    /// True when the reader on the other end of stdout went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FizzBuzzError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
