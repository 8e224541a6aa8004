use std::fmt::{self, Display, Formatter};
use super::{ArithmeticError, Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the greatest common divisor of `a` and `b`.
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// An exact fraction of two 64-bit integers.
///
/// A `Rational` is always in canonical form: the denominator is positive, and the numerator and
/// denominator share no common factor. Zero is `0/1`. Because the form is unique, two rationals
/// are equal exactly when their fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    /// The rational `0/1`.
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };

    /// The rational `1/1`.
    pub const ONE: Rational = Rational { numer: 1, denom: 1 };

    /// Creates a rational from a numerator and denominator, reducing it to canonical form.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn new(numer: i64, denom: i64) -> Result<Self, ArithmeticError> {
        Self::from_wide(numer.into(), denom.into())
    }

    /// Creates a rational with denominator 1.
    pub fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// Reduces a 128-bit fraction to canonical form, failing if the reduced parts do not fit in
    /// 64 bits.
    fn from_wide(numer: i128, denom: i128) -> Result<Self, ArithmeticError> {
        if denom == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        let divisor = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
        let sign = if denom < 0 { -1 } else { 1 };
        let numer = sign * (numer / divisor);
        let denom = sign * (denom / divisor);

        Ok(Self {
            numer: i64::try_from(numer).map_err(|_| ArithmeticError::Overflow)?,
            denom: i64::try_from(denom).map_err(|_| ArithmeticError::Overflow)?,
        })
    }

    /// Returns the numerator.
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// Returns the denominator, which is always positive.
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// Returns true if the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Returns the value as an integer if the denominator is 1.
    pub fn to_integer(&self) -> Option<i64> {
        self.is_integer().then_some(self.numer)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Scalar for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }

    fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let numer = self.numer as i128 * rhs.denom as i128 + rhs.numer as i128 * self.denom as i128;
        Self::from_wide(numer, self.denom as i128 * rhs.denom as i128)
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let numer = self.numer as i128 * rhs.denom as i128 - rhs.numer as i128 * self.denom as i128;
        Self::from_wide(numer, self.denom as i128 * rhs.denom as i128)
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Self::from_wide(
            self.numer as i128 * rhs.numer as i128,
            self.denom as i128 * rhs.denom as i128,
        )
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Self::from_wide(
            self.numer as i128 * rhs.denom as i128,
            self.denom as i128 * rhs.numer as i128,
        )
    }

    fn checked_neg(&self) -> Result<Self, ArithmeticError> {
        Self::from_wide(-(self.numer as i128), self.denom as i128)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
