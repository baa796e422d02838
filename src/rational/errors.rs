use thiserror::Error;

/// Errors that can occur in exact rational arithmetic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RationalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Value does not fit the fixed-width integer backend")]
    Overflow,
    #[error("Cannot approximate a non-finite number")]
    NonFinite,
}
