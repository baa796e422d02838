//! Exact rational arithmetic over a pluggable integer backend

mod errors;
mod ratio;

pub use errors::RationalError;
pub use ratio::{IntBackend, Rational, float_convergents};
