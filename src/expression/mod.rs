//! Expression shapes and filled expressions
//!
//! A [`Shape`] is the operator skeleton of an expression: which slots are
//! added, subtracted, multiplied or divided, independent of the numbers
//! that fill them. A [`FilledExpr`] pairs a shape with concrete numeral
//! substrings.

mod display;
mod errors;
mod eval;
mod expand;
mod filled;
mod shape;

pub use errors::ExpressionError;
pub use filled::FilledExpr;
pub use shape::{FACTOR_PAIRS, SINGLE_TERMS, Shape, TERM_PAIRS};

#[cfg(test)]
mod tests;
