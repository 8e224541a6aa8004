//! Exact scalar arithmetic.
//!
//! Every scalar operation is checked: instead of wrapping or panicking, an operation whose result
//! cannot be represented returns an [`ArithmeticError`].

pub mod rational;

pub use rational::Rational;

use std::fmt::{self, Debug, Display, Formatter};

/// An error that occurred while performing exact arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The result does not fit in 64 bits.
    Overflow,

    /// A value was divided by zero, or a fraction was built with a zero denominator.
    DivisionByZero,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Overflow => write!(f, "arithmetic overflow"),
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// A number that the elimination engine can operate on.
pub trait Scalar: Clone + PartialEq + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this value is the additive identity.
    fn is_zero(&self) -> bool;

    fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    /// Divides `self` by `rhs`. Dividing by zero returns [`ArithmeticError::DivisionByZero`].
    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    fn checked_neg(&self) -> Result<Self, ArithmeticError>;
}
