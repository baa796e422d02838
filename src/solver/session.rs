use std::collections::HashMap;
use std::time::Instant;

use log::info;
use num_bigint::BigInt;

use crate::expression::FilledExpr;
use crate::solver::catalog::Catalog;
use crate::solver::demolish::demolish;
use crate::solver::errors::SolverError;
use crate::utils::validate_digit_string;

/// Integer backend used for the exact arithmetic of a catalog build.
///
/// `Fixed` evaluates with `i64` (fast; candidates that overflow are
/// skipped), `Arbitrary` with `BigInt` (exact for any base length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Fixed,
    Arbitrary,
}

/// One active base numeral, the backend it was indexed under, and its
/// catalog. Queries implicitly reference the active base; replacing the
/// base or the backend rebuilds the catalog from scratch, synchronously.
pub struct Session {
    base: String,
    precision: Precision,
    catalog: Catalog,
}

impl Session {
    /// Validate `base` and build its catalog.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or non-digit base numeral.
    pub fn new(base: &str, precision: Precision) -> Result<Self, SolverError> {
        validate_digit_string(base)?;
        let catalog = build_catalog(base, precision);
        Ok(Self {
            base: base.to_string(),
            precision,
            catalog,
        })
    }

    /// Replace the active base numeral. A no-op when unchanged; otherwise
    /// the old catalog is discarded and a new one is built.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or non-digit base numeral;
    /// the session keeps its previous base in that case.
    pub fn set_base(&mut self, base: &str) -> Result<(), SolverError> {
        validate_digit_string(base)?;
        if base == self.base {
            return Ok(());
        }
        self.catalog = build_catalog(base, self.precision);
        self.base = base.to_string();
        Ok(())
    }

    /// Switch the integer backend. A catalog built under one backend is
    /// invalidated by the switch, so the catalog is rebuilt synchronously
    /// (in either direction).
    pub fn set_precision(&mut self, precision: Precision) {
        if precision == self.precision {
            return;
        }
        self.precision = precision;
        self.catalog = build_catalog(&self.base, precision);
    }

    /// The active base numeral.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Snapshot of the catalog: achievable value -> best expression.
    pub fn catalog_snapshot(&self) -> &HashMap<String, FilledExpr> {
        self.catalog.entries()
    }

    /// Decompose `x` against the active catalog.
    ///
    /// # Errors
    ///
    /// See [`demolish`].
    pub fn demolish(&self, x: f64) -> Result<FilledExpr, SolverError> {
        demolish(&self.catalog, x)
    }

    /// Decompose `x` and render the result.
    ///
    /// # Errors
    ///
    /// See [`demolish`].
    pub fn query(&self, x: f64) -> Result<String, SolverError> {
        Ok(self.demolish(x)?.to_string())
    }
}

fn build_catalog(base: &str, precision: Precision) -> Catalog {
    let start = Instant::now();
    let catalog = match precision {
        Precision::Fixed => Catalog::build::<i64>(base),
        Precision::Arbitrary => Catalog::build::<BigInt>(base),
    };
    info!(
        "Catalog for base '{}' ({:?} backend): {} entries in {:.1} ms",
        base,
        precision,
        catalog.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    catalog
}
