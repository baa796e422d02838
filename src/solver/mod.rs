//! Catalog construction and recursive decomposition
//!
//! The solver owns the expensive batch phase (building the per-base
//! [`Catalog`] of achievable integers) and the cheap query phase
//! ([`demolish`], which expresses an arbitrary number in terms of catalog
//! entries). A [`Session`] ties one active base numeral, one integer
//! backend and one catalog together.

mod catalog;
mod demolish;
mod errors;
mod session;

pub use catalog::Catalog;
pub use demolish::demolish;
pub use errors::SolverError;
pub use session::{Precision, Session};
