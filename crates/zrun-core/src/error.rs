//! Error types for plane prediction and run-length coding

use thiserror::Error;

/// Result type for zero-run operations
pub type ZrunResult<T> = Result<T, ZrunError>;

/// Errors that can occur while predicting, encoding or decoding a plane
#[derive(Error, Debug)]
pub enum ZrunError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed stream at offset {offset}: literal run needs {needed} bytes, {available} available")]
    MalformedStream {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZrunError {
    /// Shorthand for the zero row width rejection shared by every predictor
    pub fn zero_width() -> Self {
        ZrunError::InvalidArgument("row width must be positive".to_string())
    }
}
