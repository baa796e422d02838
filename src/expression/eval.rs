use crate::expression::errors::ExpressionError;
use crate::expression::shape::Shape;
use crate::rational::{IntBackend, Rational};

impl Shape {
    /// Evaluate the shape against a flat list of leaf values, consuming
    /// them in order starting at `start`.
    ///
    /// At a sum level the row starts from zero and adds or subtracts each
    /// term; at a product level it starts from one and multiplies or
    /// divides. Children always evaluate at the opposite level and consume
    /// `child.size()` values.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on division by a zero-valued term or on
    /// fixed-width overflow, and `SizeMismatch` when `values` runs out
    /// before every leaf slot is filled.
    pub fn calc<T: IntBackend>(
        &self,
        values: &[Rational<T>],
        start: usize,
        sum_level: bool,
    ) -> Result<Rational<T>, ExpressionError> {
        let mut result = if sum_level {
            Rational::zero()
        } else {
            Rational::one()
        };
        let mut consumed = 0;

        for (flag, slot) in self.flags().iter().zip(self.children()) {
            let term = match slot {
                Some(child) => {
                    let value = child.calc(values, start + consumed, !sum_level)?;
                    consumed += child.size();
                    value
                }
                None => {
                    let value = values
                        .get(start + consumed)
                        .cloned()
                        .ok_or(ExpressionError::SizeMismatch)?;
                    consumed += 1;
                    value
                }
            };
            result = if sum_level {
                if *flag {
                    result.add(&term)?
                } else {
                    result.sub(&term)?
                }
            } else if *flag {
                result.mul(&term)?
            } else {
                result.div(&term)?
            };
        }

        Ok(result)
    }
}
