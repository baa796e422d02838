use thiserror::Error;

use crate::rational::RationalError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error(transparent)]
    Arithmetic(#[from] RationalError),
    #[error("Expression shape and leaf values disagree in size")]
    SizeMismatch,
}
