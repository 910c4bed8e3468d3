use thiserror::Error;

/// Errors that can occur while constructing a rational number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("Division by zero: denominator must be non-zero")]
    DivisionByZero,
}
