use thiserror::Error;

/// Errors that can occur while reading a CSD string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid digit {character:?} at position {position}: expected '+', '-', '0' or '.'")]
    InvalidDigit { character: char, position: usize },

    #[error("Second point at position {position}: a CSD string has at most one '.'")]
    MultiplePoints { position: usize },
}

/// Errors that can occur during encoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("Cannot encode non-finite value {0}")]
    NonFinite(f64),

    #[error("Value {0} is too large: leading digit position overflows f64")]
    OutOfRange(f64),

    #[error("Non-zero digit budget must be at least 1")]
    ZeroNonzeroBudget,
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;
