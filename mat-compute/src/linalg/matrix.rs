use crate::primitive::{ArithmeticError, Rational, Scalar};
use std::fmt::{self, Display, Formatter};
use super::MatrixError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-empty, rectangular grid of [`Rational`]s.
///
/// Every operation returns a new matrix; a `Matrix` is never modified after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    rows: Vec<Vec<Rational>>,
}

impl Matrix {
    /// Creates a matrix from its rows.
    ///
    /// Fails if there are no rows, if the first row is empty, or if any row has a different
    /// length than the first.
    pub fn new(rows: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(MatrixError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(MatrixError::Ragged { row, expected, found });
        }

        Ok(Self { rows })
    }

    /// Creates the `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::new(
            (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| if i == j { Rational::ONE } else { Rational::ZERO })
                        .collect()
                })
                .collect(),
        )
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the shape of the matrix as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns true if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Returns the element at the given row and column, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        self.rows.get(row)?.get(col)
    }

    /// Returns the rows of the matrix.
    pub fn as_rows(&self) -> &[Vec<Rational>] {
        &self.rows
    }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<Rational>> {
        self.rows
    }

    /// Combines two matrices of equal shape element by element.
    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(&Rational, &Rational) -> Result<Rational, ArithmeticError>,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }

        let rows = self.rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| f(x, y)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix { rows })
    }

    /// Applies a fallible function to every element.
    fn map(
        &self,
        f: impl Fn(&Rational) -> Result<Rational, ArithmeticError>,
    ) -> Result<Matrix, MatrixError> {
        let rows = self.rows
            .iter()
            .map(|row| row.iter().map(&f).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix { rows })
    }

    /// Adds two matrices of equal shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "+", Rational::checked_add)
    }

    /// Subtracts two matrices of equal shape.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "-", Rational::checked_sub)
    }

    /// Computes the matrix product `self * other`. The number of columns of `self` must equal the
    /// number of rows of `other`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: "*",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut rows = Vec::with_capacity(self.rows());
        for row in &self.rows {
            let mut out = Vec::with_capacity(other.cols());
            for j in 0..other.cols() {
                let mut sum = Rational::ZERO;
                for (k, value) in row.iter().enumerate() {
                    sum = sum.checked_add(&value.checked_mul(&other.rows[k][j])?)?;
                }
                out.push(sum);
            }
            rows.push(out);
        }

        Ok(Matrix { rows })
    }

    /// Multiplies every element by a scalar.
    pub fn scale(&self, factor: &Rational) -> Result<Matrix, MatrixError> {
        self.map(|value| value.checked_mul(factor))
    }

    /// Divides every element by a scalar.
    pub fn div_scalar(&self, divisor: &Rational) -> Result<Matrix, MatrixError> {
        self.map(|value| value.checked_div(divisor))
    }

    /// Negates every element.
    pub fn neg(&self) -> Result<Matrix, MatrixError> {
        self.map(Rational::checked_neg)
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.cols())
            .map(|j| self.rows.iter().map(|row| row[j]).collect())
            .collect();
        Matrix { rows }
    }
}

impl Display for Matrix {
    /// Rows are separated by newlines and columns by tabs.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Builds a matrix of integers.
    fn m<const R: usize, const C: usize>(rows: [[i64; C]; R]) -> Matrix {
        Matrix::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Rational::from).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_matrices_are_rejected() {
        assert_eq!(Matrix::new(vec![]), Err(MatrixError::Empty));
        assert_eq!(Matrix::new(vec![vec![]]), Err(MatrixError::Empty));
        assert_eq!(Matrix::identity(0), Err(MatrixError::Empty));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![Rational::ONE, Rational::ONE], vec![Rational::ONE]];
        assert_eq!(
            Matrix::new(rows),
            Err(MatrixError::Ragged { row: 1, expected: 2, found: 1 }),
        );
    }

    #[test]
    fn subtract() {
        let a = m([[1, 2], [2, 1], [1, 3]]);
        let b = m([[7, -1], [5, 0], [4, -3]]);
        assert_eq!(a.sub(&b).unwrap(), m([[-6, 3], [-3, 1], [-3, 6]]));
    }

    #[test]
    fn add_shape_mismatch() {
        let err = m([[1, 2]]).add(&m([[1], [2]])).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch { op: "+", left: (1, 2), right: (2, 1) });
    }

    #[test]
    fn product() {
        let a = m([[1, 2, 3], [4, 5, 6]]);
        let b = m([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a.mul(&b).unwrap(), m([[58, 64], [139, 154]]));
        assert!(b.mul(&b).is_err());
    }

    #[test]
    fn scalar_operations() {
        let a = m([[2, 4], [6, 8]]);
        assert_eq!(a.scale(&Rational::from(3)).unwrap(), m([[6, 12], [18, 24]]));
        assert_eq!(a.div_scalar(&Rational::from(2)).unwrap(), m([[1, 2], [3, 4]]));
        assert!(a.div_scalar(&Rational::ZERO).is_err());
    }

    #[test]
    fn transpose() {
        assert_eq!(m([[1, 2, 3], [4, 5, 6]]).transpose(), m([[1, 4], [2, 5], [3, 6]]));
    }

    #[test]
    fn display() {
        let a = Matrix::new(vec![
            vec![Rational::ONE, Rational::new(-1, 2).unwrap()],
            vec![Rational::ZERO, Rational::from(7)],
        ]).unwrap();
        assert_eq!(a.to_string(), "1\t-1/2\n0\t7");
    }
}
