//! Numeralize - a library for expressing numbers out of a base numeral
//!
//! Given a digit string (the "base numeral"), this library finds arithmetic
//! expressions built only from contiguous substrings of that string,
//! combined with `+`, `-`, `*` and `/`, that evaluate to any requested
//! number. The expensive part is a one-time exhaustive search that indexes
//! every achievable non-negative integer for the base; afterwards each
//! query is a fast recursive decomposition against that index.

pub mod expression;
pub mod rational;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, FilledExpr};
pub use rational::{Rational, RationalError};
pub use solver::{Catalog, Precision, Session, SolverError};
pub use utils::{UtilsError, validate_digit_string};

/// Express `target` using substrings of `base` and render the result.
///
/// This is a convenience function that builds a fresh [`Session`] with the
/// fixed-width backend for a single query. Use a [`Session`] directly to
/// amortize the catalog build over many queries.
///
/// # Errors
///
/// This function will return an error if:
/// * The base numeral is empty or contains non-digit characters
/// * The target is NaN or infinite
///
/// # Examples
///
/// ```
/// use numeralize::express;
///
/// // Express 4 out of pieces of "123".
/// match express("123", 4.0) {
///     Ok(rendered) => println!("Found: {}", rendered),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn express(base: &str, target: f64) -> Result<String, SolverError> {
    let session = Session::new(base, Precision::Fixed)?;
    session.query(target)
}
