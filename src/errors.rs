//! Custom error types for grid and coordinate processing

use std::fmt;
use std::io;

/// Grid-specific error types
#[derive(Debug)]
pub enum GridError {
    /// I/O error
    IoError(io::Error),
    /// Text that is not a decimal number
    InvalidDecimal(String),
    /// Text that is not a floating point number
    InvalidFloat(String),
    /// Pixel size of zero
    DivisionByZero,
    /// Decimal result out of range
    Overflow(String),
    /// Malformed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IoError(e) => write!(f, "I/O error: {}", e),
            GridError::InvalidDecimal(s) => write!(f, "Invalid decimal value: '{}'", s),
            GridError::InvalidFloat(s) => write!(f, "Invalid float value: '{}'", s),
            GridError::DivisionByZero => write!(f, "Division by zero pixel size"),
            GridError::Overflow(msg) => write!(f, "Decimal overflow: {}", msg),
            GridError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GridError::GenericError(msg) => write!(f, "Grid error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<io::Error> for GridError {
    fn from(error: io::Error) -> Self {
        GridError::IoError(error)
    }
}

impl From<rust_decimal::Error> for GridError {
    fn from(error: rust_decimal::Error) -> Self {
        GridError::Overflow(error.to_string())
    }
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

impl From<String> for GridError {
    fn from(msg: String) -> Self {
        GridError::GenericError(msg)
    }
}
