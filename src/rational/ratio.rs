use std::fmt;

use log::debug;
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, Signed};

use crate::rational::errors::RationalError;

/// Integer capability required by [`Rational`].
///
/// Two backends satisfy it: `i64` (fixed width, arithmetic checked for
/// overflow) and `num_bigint::BigInt` (arbitrary precision, checked
/// operations never fail).
pub trait IntBackend:
    Integer
    + Signed
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + FromPrimitive
    + Clone
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> IntBackend for T where
    T: Integer
        + Signed
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + FromPrimitive
        + Clone
        + fmt::Debug
        + fmt::Display
        + Send
        + Sync
        + 'static
{
}

/// Exact fraction, always reduced.
///
/// Invariants: `gcd(|num|, |den|) == 1` and `den > 0` after every
/// construction; the value's sign is carried by the numerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational<T: IntBackend> {
    num: T,
    den: T,
}

impl<T: IntBackend> Rational<T> {
    /// Build a reduced fraction from a numerator and a denominator.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `den` is zero.
    pub fn new(num: T, den: T) -> Result<Self, RationalError> {
        if den.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        // The GCD takes the denominator's sign so the reduced denominator
        // comes out positive.
        let mut gcd = num.gcd(&den);
        if den.is_negative() {
            gcd = -gcd;
        }
        Ok(Self {
            num: num / gcd.clone(),
            den: den / gcd,
        })
    }

    pub fn zero() -> Self {
        Self {
            num: T::zero(),
            den: T::one(),
        }
    }

    pub fn one() -> Self {
        Self {
            num: T::one(),
            den: T::one(),
        }
    }

    pub fn from_integer(n: T) -> Self {
        Self {
            num: n,
            den: T::one(),
        }
    }

    /// Parse a decimal digit string as an integer value.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the string does not fit the backend (only
    /// possible with the fixed-width backend).
    pub fn parse(digits: &str) -> Result<Self, RationalError> {
        let n = T::from_str_radix(digits, 10).map_err(|_| RationalError::Overflow)?;
        Ok(Self::from_integer(n))
    }

    /// Continued-fraction approximation of a float.
    ///
    /// # Errors
    ///
    /// Returns `NonFinite` for NaN or infinite input, `Overflow` when a
    /// convergent does not fit the backend.
    pub fn from_float(x: f64) -> Result<Self, RationalError> {
        let (h, k) = float_convergents(x)?;
        let num = T::from_f64(h).ok_or(RationalError::Overflow)?;
        let den = T::from_f64(k).ok_or(RationalError::Overflow)?;
        Self::new(num, den)
    }

    pub fn numer(&self) -> &T {
        &self.num
    }

    pub fn denom(&self) -> &T {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den == T::one()
    }

    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// # Errors
    ///
    /// Returns `Overflow` when an intermediate product or sum does not fit
    /// the fixed-width backend.
    pub fn add(&self, other: &Self) -> Result<Self, RationalError> {
        if self.den == other.den {
            let num = self
                .num
                .checked_add(&other.num)
                .ok_or(RationalError::Overflow)?;
            Self::new(num, self.den.clone())
        } else {
            let l = self
                .num
                .checked_mul(&other.den)
                .ok_or(RationalError::Overflow)?;
            let r = other
                .num
                .checked_mul(&self.den)
                .ok_or(RationalError::Overflow)?;
            let num = l.checked_add(&r).ok_or(RationalError::Overflow)?;
            let den = self
                .den
                .checked_mul(&other.den)
                .ok_or(RationalError::Overflow)?;
            Self::new(num, den)
        }
    }

    /// # Errors
    ///
    /// Returns `Overflow` when an intermediate product or difference does
    /// not fit the fixed-width backend.
    pub fn sub(&self, other: &Self) -> Result<Self, RationalError> {
        if self.den == other.den {
            let num = self
                .num
                .checked_sub(&other.num)
                .ok_or(RationalError::Overflow)?;
            Self::new(num, self.den.clone())
        } else {
            let l = self
                .num
                .checked_mul(&other.den)
                .ok_or(RationalError::Overflow)?;
            let r = other
                .num
                .checked_mul(&self.den)
                .ok_or(RationalError::Overflow)?;
            let num = l.checked_sub(&r).ok_or(RationalError::Overflow)?;
            let den = self
                .den
                .checked_mul(&other.den)
                .ok_or(RationalError::Overflow)?;
            Self::new(num, den)
        }
    }

    /// # Errors
    ///
    /// Returns `Overflow` when a product does not fit the fixed-width
    /// backend.
    pub fn mul(&self, other: &Self) -> Result<Self, RationalError> {
        let num = self
            .num
            .checked_mul(&other.num)
            .ok_or(RationalError::Overflow)?;
        let den = self
            .den
            .checked_mul(&other.den)
            .ok_or(RationalError::Overflow)?;
        Self::new(num, den)
    }

    /// # Errors
    ///
    /// Returns `DivisionByZero` when `other` is the zero rational,
    /// `Overflow` when a product does not fit the fixed-width backend.
    pub fn div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.num.is_zero() {
            debug!("Division by zero rational attempted");
            return Err(RationalError::DivisionByZero);
        }
        let num = self
            .num
            .checked_mul(&other.den)
            .ok_or(RationalError::Overflow)?;
        let den = self
            .den
            .checked_mul(&other.num)
            .ok_or(RationalError::Overflow)?;
        Self::new(num, den)
    }
}

impl<T: IntBackend> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Convergent pair `(numerator, denominator)` approximating `x` via the
/// classic continued-fraction recurrence `h = a*h1 + h2`, `k = a*k1 + k2`,
/// stopping once the error drops below `1e-15` scaled by `k²`.
///
/// This is the only source of approximation error in the crate; it is used
/// for non-integer targets, never inside the integer search.
///
/// # Errors
///
/// Returns `NonFinite` for NaN or infinite input.
pub fn float_convergents(x0: f64) -> Result<(f64, f64), RationalError> {
    if !x0.is_finite() {
        return Err(RationalError::NonFinite);
    }
    const EPS: f64 = 1.0e-15;

    let mut x = x0;
    let mut a = x.floor();
    let (mut h, mut h1) = (a, 1.0);
    let (mut k, mut k1) = (1.0, 0.0);

    while x - a > EPS * k * k {
        x = 1.0 / (x - a);
        a = x.floor();
        let h2 = h1;
        h1 = h;
        let k2 = k1;
        k1 = k;
        h = h2 + a * h1;
        k = k2 + a * k1;
    }

    debug!("Approximated {} as {}/{}", x0, h, k);
    Ok((h, k))
}
