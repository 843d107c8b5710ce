use thiserror::Error;

/// Errors that can occur while building a codec, decoding a numeral or encoding a value
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumeralError {
    #[error("Invalid radix {0}: must not be 0 or 1 and its magnitude must not exceed 62")]
    InvalidRadix(i32),

    #[error("Invalid digit symbol {0:?}: not part of the digit alphabet")]
    InvalidDigitSymbol(char),

    #[error("Invalid digit value {0}: outside valid range [0, 61]")]
    InvalidDigitValue(u32),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot encode non-finite value {0}")]
    NonFiniteValue(f64),
}

/// Result type for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
