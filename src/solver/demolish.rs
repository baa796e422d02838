use log::debug;

use crate::expression::FilledExpr;
use crate::rational::float_convergents;
use crate::solver::catalog::Catalog;
use crate::solver::errors::SolverError;

/// Express an arbitrary requested number in terms of catalog entries.
///
/// Negative targets decompose as the negation of their absolute value;
/// non-integers as the quotient of their continued-fraction numerator and
/// denominator; integers either hit the catalog directly or split into
/// `div * quot + rem` around the largest achievable integer `div <= x`.
/// That split only shrinks when `div >= 2`, so an `x` whose only usable
/// divisor is 1 (or that is below every positive catalog entry) is summed
/// from units instead. Every recursive call either strictly decreases the
/// value or hits the catalog, so the recursion terminates.
///
/// # Errors
///
/// Returns `Unrepresentable` for NaN or infinite input and
/// `NotDecomposable` when the catalog has no positive entries at all
/// (possible only for bases like `"0"` whose digits reach no positive
/// integer).
pub fn demolish(catalog: &Catalog, x: f64) -> Result<FilledExpr, SolverError> {
    if !x.is_finite() {
        return Err(SolverError::Unrepresentable(x));
    }
    // -0.0 would format its catalog key as "-0" and miss the "0" entry.
    let x = if x == 0.0 { 0.0 } else { x };
    if x < 0.0 {
        return Ok(demolish(catalog, -x)?.neg());
    }
    if x.fract() != 0.0 {
        let (num, den) = float_convergents(x)?;
        debug!("Decomposing {} as {}/{}", x, num, den);
        let numerator = demolish(catalog, num)?;
        let denominator = demolish(catalog, den)?;
        return Ok(numerator.div(&denominator));
    }

    let key = format!("{}", x);
    if let Some(expr) = catalog.get(&key) {
        return Ok(expr.clone());
    }

    if let Some(div) = catalog.largest_divisor(x) {
        if div >= 2.0 {
            let quot = (x / div).floor();
            let rem = x % div;
            debug!("Decomposing {} as {} * {} + {}", x, div, quot, rem);
            let mut result = demolish(catalog, div)?;
            if quot != 1.0 {
                result = result.mul(&demolish(catalog, quot)?);
            }
            if rem != 0.0 {
                result = result.add(&demolish(catalog, rem)?);
            }
            return Ok(result);
        }
        // div == 1 would give quot == x and never shrink; x copies of the
        // catalog's unit sum to x directly.
        debug!("Decomposing {} as {} additions of 1", x, x);
        let one = demolish(catalog, 1.0)?;
        return Ok(repeated_units(&one, x));
    }

    // x is a positive integer below every positive achievable value, so
    // the div/quot/rem split has nothing to recurse on. m/m is always 1
    // for the smallest positive entry m; x copies of it sum to x.
    let smallest = catalog
        .smallest_positive()
        .ok_or(SolverError::NotDecomposable(x))?;
    debug!("Synthesizing {} as a sum of {}/{} units", x, smallest, smallest);
    let unit = demolish(catalog, smallest)?;
    let one = unit.div(&unit);
    Ok(repeated_units(&one, x))
}

/// `count` copies of `one` combined by addition; `count` must be a
/// positive integer.
fn repeated_units(one: &FilledExpr, count: f64) -> FilledExpr {
    let mut result = one.clone();
    let mut remaining = count - 1.0;
    while remaining >= 1.0 {
        result = result.add(one);
        remaining -= 1.0;
    }
    result
}
