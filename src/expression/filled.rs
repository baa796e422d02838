use std::fmt;
use std::sync::Arc;

use crate::expression::errors::ExpressionError;
use crate::expression::shape::Shape;
use crate::rational::{IntBackend, Rational};

/// A shape paired with the concrete numeral substrings that fill its leaf
/// slots, in traversal order.
///
/// Combinators concatenate the leaf lists alongside the shape combination,
/// so combining filled expressions never re-inspects the substrings.
#[derive(Debug, Clone)]
pub struct FilledExpr {
    shape: Arc<Shape>,
    values: Vec<String>,
}

impl FilledExpr {
    /// # Errors
    ///
    /// Returns `SizeMismatch` when the value list's length differs from the
    /// shape's leaf count.
    pub fn new(shape: Arc<Shape>, values: Vec<String>) -> Result<Self, ExpressionError> {
        if shape.size() != values.len() {
            return Err(ExpressionError::SizeMismatch);
        }
        Ok(Self { shape, values })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn add(&self, other: &FilledExpr) -> FilledExpr {
        FilledExpr {
            shape: Arc::new(self.shape.add(&other.shape)),
            values: [self.values.clone(), other.values.clone()].concat(),
        }
    }

    pub fn sub(&self, other: &FilledExpr) -> FilledExpr {
        FilledExpr {
            shape: Arc::new(self.shape.sub(&other.shape)),
            values: [self.values.clone(), other.values.clone()].concat(),
        }
    }

    pub fn mul(&self, other: &FilledExpr) -> FilledExpr {
        FilledExpr {
            shape: Arc::new(self.shape.mul(&other.shape)),
            values: [self.values.clone(), other.values.clone()].concat(),
        }
    }

    pub fn div(&self, other: &FilledExpr) -> FilledExpr {
        FilledExpr {
            shape: Arc::new(self.shape.div(&other.shape)),
            values: [self.values.clone(), other.values.clone()].concat(),
        }
    }

    pub fn neg(&self) -> FilledExpr {
        FilledExpr {
            shape: Arc::new(self.shape.neg()),
            values: self.values.clone(),
        }
    }

    /// Evaluate to an exact rational under the chosen integer backend.
    ///
    /// # Errors
    ///
    /// Returns an error when a leaf does not fit the backend or when the
    /// shape's arithmetic fails (division by zero, fixed-width overflow).
    pub fn calc<T: IntBackend>(&self) -> Result<Rational<T>, ExpressionError> {
        let values = self
            .values
            .iter()
            .map(|v| Rational::parse(v))
            .collect::<Result<Vec<_>, _>>()?;
        self.shape.calc(&values, 0, true)
    }
}

impl fmt::Display for FilledExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.shape.render(&self.values, 0, true, false))
    }
}
