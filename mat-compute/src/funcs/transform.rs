//! The matrix reductions `rref`, `to_diag`, `to_triangle`, `inv`, `det`, and `rank`.

use crate::linalg::{Reduced, Reduction};
use crate::numerical::{builtin::{error::BuiltinError, Arity, Builtin}, value::Value};
use std::io::Write;

/// Applies a [`Reduction`] to its single matrix argument.
///
/// One builtin is registered per reduction, named after it.
#[derive(Debug)]
pub struct LinearTransform(pub Reduction);

impl Builtin for LinearTransform {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, _: &mut dyn Write, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let matrix = match args.first() {
            Some(Value::Matrix(matrix)) => matrix,
            other => return Err(BuiltinError::TypeMismatch {
                name: self.name().to_string(),
                index: 0,
                expected: "Matrix",
                given: other.map_or("Unit", Value::typename),
            }),
        };

        match self.0.apply(matrix).map_err(|err| BuiltinError::matrix(self.name(), err))? {
            Reduced::Matrix(matrix) => Ok(Value::Matrix(matrix)),
            Reduced::Scalar(value) => Ok(Value::scalar(value)),
            Reduced::Count(count) => Ok(Value::Integer(count as i64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::linalg::{Matrix, MatrixError};
    use crate::primitive::Rational;
    use pretty_assertions::assert_eq;
    use super::*;

    fn m<const R: usize, const C: usize>(rows: [[i64; C]; R]) -> Value {
        Value::Matrix(Matrix::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Rational::from).collect())
                .collect(),
        ).unwrap())
    }

    fn apply(reduction: Reduction, arg: Value) -> Result<Value, BuiltinError> {
        LinearTransform(reduction).eval(&mut std::io::sink(), vec![arg])
    }

    #[test]
    fn determinant() {
        let a = m([[5, -6, -7, 7], [3, -2, 5, -17], [2, 4, -3, 29], [1, 1, -1, 1]]);
        assert_eq!(apply(Reduction::Det, a).unwrap(), Value::Integer(2368));
    }

    #[test]
    fn rank_is_an_integer() {
        assert!(matches!(apply(Reduction::Rank, m([[1, 0], [0, 0]])).unwrap(), Value::Integer(1)));
    }

    #[test]
    fn inverse_round_trip() {
        let a = m([[1, 2], [3, 4]]);
        let inv = apply(Reduction::Inv, a.clone()).unwrap();
        assert_eq!(apply(Reduction::Inv, inv).unwrap(), a);
    }

    #[test]
    fn not_square() {
        assert!(matches!(
            apply(Reduction::Det, m([[1, 2, 3]])),
            Err(BuiltinError::Matrix { name: "det", err: MatrixError::NotSquare { rows: 1, cols: 3 } }),
        ));
    }

    #[test]
    fn requires_a_matrix() {
        assert!(matches!(
            apply(Reduction::Rref, Value::Integer(3)),
            Err(BuiltinError::TypeMismatch { index: 0, expected: "Matrix", given: "Integer", .. }),
        ));
    }
}
