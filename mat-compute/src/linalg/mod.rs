//! Matrices of exact rationals and the Gaussian elimination engine behind the matrix reductions.

pub mod elimination;
pub mod matrix;

pub use elimination::{Mode, Reduced, Reduction};
pub use matrix::Matrix;

use crate::primitive::ArithmeticError;
use std::fmt::{self, Display, Formatter};

/// An error that occurred while building or operating on a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows, or its rows have no elements.
    Empty,

    /// A row has a different length than the first row.
    Ragged {
        /// The index of the offending row.
        row: usize,

        /// The length of the first row.
        expected: usize,

        /// The length of the offending row.
        found: usize,
    },

    /// The shapes of the operands are incompatible with the operation.
    ShapeMismatch {
        /// The symbol of the operation.
        op: &'static str,

        /// The shape of the left operand, as `(rows, columns)`.
        left: (usize, usize),

        /// The shape of the right operand, as `(rows, columns)`.
        right: (usize, usize),
    },

    /// The operation requires a square matrix.
    NotSquare {
        rows: usize,
        cols: usize,
    },

    /// The matrix has no inverse.
    Singular,

    /// An element computation failed.
    Arithmetic(ArithmeticError),
}

impl From<ArithmeticError> for MatrixError {
    fn from(err: ArithmeticError) -> Self {
        MatrixError::Arithmetic(err)
    }
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Empty => write!(f, "a matrix must have at least one row and one column"),
            MatrixError::Ragged { row, expected, found } => write!(
                f,
                "row {} has {} element(s), but the first row has {}",
                row + 1,
                found,
                expected,
            ),
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "cannot apply `{}` to a {}x{} matrix and a {}x{} matrix",
                op,
                left.0,
                left.1,
                right.0,
                right.1,
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "expected a square matrix, found a {}x{} matrix", rows, cols)
            },
            MatrixError::Singular => write!(f, "the matrix is singular"),
            MatrixError::Arithmetic(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for MatrixError {}
