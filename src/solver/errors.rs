use thiserror::Error;

use crate::expression::ExpressionError;
use crate::rational::RationalError;
use crate::utils::UtilsError;

/// Errors that can occur during solving
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("No meaningful expression exists for non-finite input {0}")]
    Unrepresentable(f64),
    #[error("Catalog contains no positive integer small enough to decompose {0}")]
    NotDecomposable(f64),
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Arithmetic error: {0}")]
    ArithmeticError(#[from] RationalError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
