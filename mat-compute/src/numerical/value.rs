use crate::linalg::{Matrix, MatrixError};
use crate::primitive::{Rational, Scalar};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any value that can be stored in a variable or produced by an expression.
///
/// Scalars have exactly one representation: a number whose denominator is 1 is always an
/// [`Value::Integer`]. Use [`Value::scalar`] to build a scalar from a [`Rational`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A whole number.
    Integer(i64),

    /// An exact fraction whose denominator is not 1.
    Rational(Rational),

    /// A matrix of exact rationals.
    Matrix(Matrix),

    /// A reference to a name, such as a builtin function passed as an argument, or the name being
    /// declared by `init`.
    Symbol(String),

    /// The unit type, analogous to `()` in Rust. This is the result of functions that are called
    /// for their side effects, like `print`.
    Unit,
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Rational(_) => "Rational",
            Value::Matrix(_) => "Matrix",
            Value::Symbol(_) => "Symbol",
            Value::Unit => "Unit",
        }
    }

    /// Creates a scalar value, collapsing it to an [`Value::Integer`] if its denominator is 1.
    pub fn scalar(value: Rational) -> Self {
        match value.to_integer() {
            Some(n) => Value::Integer(n),
            None => Value::Rational(value),
        }
    }

    /// Returns the value as a [`Rational`] if it is a scalar.
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Value::Integer(n) => Some(Rational::from_integer(*n)),
            Value::Rational(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns true if the value is a scalar (an integer or a rational).
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Rational(_))
    }

    /// Returns true if the value is the unit type.
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Negates a scalar or every element of a matrix. Returns [`None`] for values that cannot be
    /// negated.
    pub fn checked_neg(&self) -> Option<Result<Value, MatrixError>> {
        match self {
            Value::Integer(_) | Value::Rational(_) => {
                let value = self.as_rational()?;
                Some(value.checked_neg().map(Value::scalar).map_err(MatrixError::from))
            },
            Value::Matrix(matrix) => Some(matrix.neg().map(Value::Matrix)),
            Value::Symbol(_) | Value::Unit => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Matrix(a), Value::Matrix(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            (a, b) => match (a.as_rational(), b.as_rational()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Rational(r) => write!(f, "{}", r),
            Value::Matrix(matrix) => write!(f, "{}", matrix),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Unit => write!(f, "()"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::scalar(r)
    }
}

impl From<Matrix> for Value {
    fn from(matrix: Matrix) -> Self {
        Value::Matrix(matrix)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::ArithmeticError;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn scalars_collapse_to_integers() {
        assert_eq!(Value::scalar(Rational::new(6, 3).unwrap()), Value::Integer(2));
        assert!(matches!(Value::scalar(Rational::new(1, 3).unwrap()), Value::Rational(_)));
    }

    #[test]
    fn numeric_equality() {
        let two = Value::Rational(Rational::from_integer(2));
        assert_eq!(two, Value::Integer(2));
        assert_ne!(Value::Integer(0), Value::Unit);
        assert_ne!(Value::Symbol("det".to_string()), Value::Symbol("rank".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Integer(-4).to_string(), "-4");
        assert_eq!(Value::from(Rational::new(-1, 3).unwrap()).to_string(), "-1/3");
        assert_eq!(Value::Unit.to_string(), "()");
        assert_eq!(Value::Symbol("det".to_string()).to_string(), "det");
    }

    #[test]
    fn negate() {
        assert_eq!(Value::Integer(3).checked_neg().unwrap().unwrap(), Value::Integer(-3));
        assert_eq!(
            Value::Integer(i64::MIN).checked_neg().unwrap(),
            Err(MatrixError::Arithmetic(ArithmeticError::Overflow)),
        );
        assert!(Value::Unit.checked_neg().is_none());
    }
}
