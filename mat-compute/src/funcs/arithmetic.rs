//! The binary arithmetic operators `+`, `-`, `*`, and `/`.
//!
//! Each operator dispatches on the variants of both operands. Scalars are combined as exact
//! rationals and collapse back to integers where possible.

use crate::numerical::{builtin::{error::BuiltinError, Arity, Builtin}, value::Value};
use crate::primitive::{Rational, Scalar};
use std::io::Write;

/// Returns both operands as rationals if both are scalars.
fn scalars(lhs: &Value, rhs: &Value) -> Option<(Rational, Rational)> {
    Some((lhs.as_rational()?, rhs.as_rational()?))
}

/// The error for an operand pairing the operator does not support.
fn invalid(op: &'static str, lhs: &Value, rhs: &Value) -> BuiltinError {
    BuiltinError::InvalidBinaryOperation {
        op,
        left: lhs.typename(),
        right: rhs.typename(),
    }
}

/// Implements [`Builtin`] for a binary operator with an `eval_static(Value, Value)` method.
macro_rules! binary_builtin {
    ($upname:ident, $symbol:literal) => {
        impl Builtin for $upname {
            fn name(&self) -> &'static str {
                $symbol
            }

            fn arity(&self) -> Arity {
                Arity::Exact(2)
            }

            fn eval(&self, _: &mut dyn Write, args: Vec<Value>) -> Result<Value, BuiltinError> {
                let mut args = args.into_iter();
                match (args.next(), args.next()) {
                    (Some(lhs), Some(rhs)) => Self::eval_static(lhs, rhs),
                    _ => unreachable!("arity was checked"),
                }
            }
        }
    };
}

/// Adds two scalars, or two matrices of the same shape.
#[derive(Debug)]
pub struct Add;

impl Add {
    pub fn eval_static(lhs: Value, rhs: Value) -> Result<Value, BuiltinError> {
        match (&lhs, &rhs) {
            (Value::Matrix(a), Value::Matrix(b)) => a.add(b)
                .map(Value::Matrix)
                .map_err(|err| BuiltinError::matrix("+", err)),
            _ => match scalars(&lhs, &rhs) {
                Some((a, b)) => Ok(Value::scalar(a.checked_add(&b)?)),
                None => Err(invalid("+", &lhs, &rhs)),
            },
        }
    }
}

binary_builtin!(Add, "+");

/// Subtracts two scalars, or two matrices of the same shape.
#[derive(Debug)]
pub struct Sub;

impl Sub {
    pub fn eval_static(lhs: Value, rhs: Value) -> Result<Value, BuiltinError> {
        match (&lhs, &rhs) {
            (Value::Matrix(a), Value::Matrix(b)) => a.sub(b)
                .map(Value::Matrix)
                .map_err(|err| BuiltinError::matrix("-", err)),
            _ => match scalars(&lhs, &rhs) {
                Some((a, b)) => Ok(Value::scalar(a.checked_sub(&b)?)),
                None => Err(invalid("-", &lhs, &rhs)),
            },
        }
    }
}

binary_builtin!(Sub, "-");

/// Multiplies two scalars, a matrix by a scalar (on either side), or two matrices using the
/// matrix product.
#[derive(Debug)]
pub struct Mul;

impl Mul {
    pub fn eval_static(lhs: Value, rhs: Value) -> Result<Value, BuiltinError> {
        let result = match (&lhs, &rhs) {
            (Value::Matrix(a), Value::Matrix(b)) => a.mul(b),
            (Value::Matrix(m), other) | (other, Value::Matrix(m)) => match other.as_rational() {
                Some(factor) => m.scale(&factor),
                None => return Err(invalid("*", &lhs, &rhs)),
            },
            _ => return match scalars(&lhs, &rhs) {
                Some((a, b)) => Ok(Value::scalar(a.checked_mul(&b)?)),
                None => Err(invalid("*", &lhs, &rhs)),
            },
        };

        result
            .map(Value::Matrix)
            .map_err(|err| BuiltinError::matrix("*", err))
    }
}

binary_builtin!(Mul, "*");

/// Divides two scalars, or every element of a matrix by a scalar.
#[derive(Debug)]
pub struct Div;

impl Div {
    pub fn eval_static(lhs: Value, rhs: Value) -> Result<Value, BuiltinError> {
        match (&lhs, &rhs) {
            (Value::Matrix(m), divisor) => match divisor.as_rational() {
                Some(divisor) => m.div_scalar(&divisor)
                    .map(Value::Matrix)
                    .map_err(|err| BuiltinError::matrix("/", err)),
                None => Err(invalid("/", &lhs, &rhs)),
            },
            _ => match scalars(&lhs, &rhs) {
                Some((a, b)) => Ok(Value::scalar(a.checked_div(&b)?)),
                None => Err(invalid("/", &lhs, &rhs)),
            },
        }
    }
}

binary_builtin!(Div, "/");

#[cfg(test)]
mod tests {
    use crate::linalg::{Matrix, MatrixError};
    use crate::primitive::ArithmeticError;
    use pretty_assertions::assert_eq;
    use super::*;

    fn m<const R: usize, const C: usize>(rows: [[i64; C]; R]) -> Value {
        Value::Matrix(Matrix::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Rational::from).collect())
                .collect(),
        ).unwrap())
    }

    fn r(numer: i64, denom: i64) -> Value {
        Value::scalar(Rational::new(numer, denom).unwrap())
    }

    #[test]
    fn scalar_arithmetic() {
        assert_eq!(Add::eval_static(Value::Integer(1), Value::Integer(2)).unwrap(), Value::Integer(3));
        assert_eq!(Sub::eval_static(r(1, 2), r(1, 2)).unwrap(), Value::Integer(0));
        assert_eq!(Mul::eval_static(r(2, 3), Value::Integer(3)).unwrap(), Value::Integer(2));
        assert_eq!(Div::eval_static(Value::Integer(1), Value::Integer(3)).unwrap(), r(1, 3));
    }

    #[test]
    fn quotients_collapse_to_integers() {
        assert!(matches!(Div::eval_static(Value::Integer(6), Value::Integer(3)).unwrap(), Value::Integer(2)));
    }

    #[test]
    fn scalar_division_by_zero() {
        assert!(matches!(
            Div::eval_static(Value::Integer(1), Value::Integer(0)),
            Err(BuiltinError::Arithmetic(ArithmeticError::DivisionByZero)),
        ));
    }

    #[test]
    fn matrix_sum_and_difference() {
        let a = m([[1, 2], [2, 1], [1, 3]]);
        let b = m([[7, -1], [5, 0], [4, -3]]);
        assert_eq!(Add::eval_static(a.clone(), b.clone()).unwrap(), m([[8, 1], [7, 1], [5, 0]]));
        assert_eq!(Sub::eval_static(a, b).unwrap(), m([[-6, 3], [-3, 1], [-3, 6]]));
    }

    #[test]
    fn scaling_on_either_side() {
        let a = m([[1, 2], [3, 4]]);
        assert_eq!(Mul::eval_static(a.clone(), Value::Integer(2)).unwrap(), m([[2, 4], [6, 8]]));
        assert_eq!(Mul::eval_static(Value::Integer(2), a).unwrap(), m([[2, 4], [6, 8]]));
    }

    #[test]
    fn matrix_divided_by_scalar() {
        let a = m([[2, 4], [6, 8]]);
        assert_eq!(Div::eval_static(a.clone(), Value::Integer(2)).unwrap(), m([[1, 2], [3, 4]]));
        assert!(matches!(
            Div::eval_static(a, Value::Integer(0)),
            Err(BuiltinError::Arithmetic(ArithmeticError::DivisionByZero)),
        ));
    }

    #[test]
    fn matrix_product_shapes() {
        let a = m([[1, 2, 3]]);
        let b = m([[1], [2], [3]]);
        assert_eq!(Mul::eval_static(a.clone(), b).unwrap(), m([[14]]));
        assert!(matches!(
            Mul::eval_static(a.clone(), a),
            Err(BuiltinError::Matrix { name: "*", err: MatrixError::ShapeMismatch { .. } }),
        ));
    }

    #[test]
    fn unsupported_pairings() {
        let a = m([[1]]);
        assert!(matches!(
            Add::eval_static(a.clone(), Value::Integer(1)),
            Err(BuiltinError::InvalidBinaryOperation { op: "+", left: "Matrix", right: "Integer" }),
        ));
        assert!(matches!(
            Div::eval_static(Value::Integer(1), a),
            Err(BuiltinError::InvalidBinaryOperation { op: "/", left: "Integer", right: "Matrix" }),
        ));
        assert!(matches!(
            Mul::eval_static(Value::Symbol("det".to_string()), Value::Integer(2)),
            Err(BuiltinError::InvalidBinaryOperation { op: "*", left: "Symbol", .. }),
        ));
        assert!(matches!(
            Sub::eval_static(Value::Unit, Value::Unit),
            Err(BuiltinError::InvalidBinaryOperation { op: "-", .. }),
        ));
    }
}
