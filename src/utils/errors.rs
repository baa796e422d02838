use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Base numeral cannot be empty")]
    EmptyDigitString,
    #[error("Base numeral must contain only digits: {0}")]
    InvalidDigitString(String),
}
