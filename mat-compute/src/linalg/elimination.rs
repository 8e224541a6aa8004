//! A single Gaussian elimination routine, parameterized by [`Mode`] flags, that implements every
//! matrix reduction.
//!
//! | reduction     | flags                   | result                               |
//! | ------------- | ----------------------- | ------------------------------------ |
//! | `rref`        | `NORMALIZE \| ABOVE`     | the reduced row echelon form         |
//! | `to_diag`     | `ABOVE \| DIAGONAL`      | a matrix with zeros off the pivots   |
//! | `to_triangle` | `DIAGONAL`              | an upper triangular matrix           |
//! | `inv`         | `NORMALIZE \| ABOVE`     | the inverse, from the augmented form |
//! | `det`         | `ABOVE`                 | the signed product of the pivots     |
//! | `rank`        | `ABOVE`                 | the number of pivots                 |

use bitflags::bitflags;
use crate::primitive::{ArithmeticError, Rational, Scalar};
use std::fmt::{self, Display, Formatter};
use super::{Matrix, MatrixError};
use tracing::{debug, instrument, trace};

bitflags! {
    /// Controls which steps the elimination performs at each pivot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mode: u8 {
        /// Divide the pivot row by the pivot, so that every pivot becomes 1.
        const NORMALIZE = 1 << 0;

        /// Eliminate the rows above the pivot as well as the rows below it.
        const ABOVE = 1 << 1;

        /// Only look for pivots on the diagonal. A column with no pivot skips its row as well,
        /// instead of searching the next column in the same row.
        const DIAGONAL = 1 << 2;
    }
}

/// The outcome of running the elimination on a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// The `(row, column)` position of every pivot, in order.
    pub pivots: Vec<(usize, usize)>,

    /// The number of row swaps that were performed.
    pub swaps: usize,
}

/// Runs Gaussian elimination in place on `grid`, looking for pivots only in the first
/// `pivot_cols` columns.
///
/// The pivot position starts at `(0, 0)`. When the pivot cell is zero, the first row below it
/// with a nonzero entry in that column is swapped in; if there is none, the column has no pivot
/// and is skipped without consuming the row (or, with [`Mode::DIAGONAL`], together with the row).
/// Entries are then eliminated below the pivot (and
/// above it with [`Mode::ABOVE`]), and with [`Mode::NORMALIZE`] the pivot row is divided by the
/// pivot afterwards.
///
/// All rows of `grid` must have the same length, which must be at least `pivot_cols`.
#[instrument(level = "trace", skip(grid))]
pub fn eliminate<T: Scalar>(
    grid: &mut [Vec<T>],
    pivot_cols: usize,
    mode: Mode,
) -> Result<Elimination, ArithmeticError> {
    let rows = grid.len();
    let mut pivots = Vec::new();
    let mut swaps = 0;
    let (mut r, mut c) = (0, 0);

    while r < rows && c < pivot_cols {
        if grid[r][c].is_zero() {
            match (r + 1..rows).find(|&k| !grid[k][c].is_zero()) {
                Some(k) => {
                    trace!(from = k, to = r, "swapping rows");
                    grid.swap(r, k);
                    swaps += 1;
                },
                None => {
                    trace!(column = c, "column has no pivot");
                    if mode.contains(Mode::DIAGONAL) {
                        r += 1;
                    }
                    c += 1;
                    continue;
                },
            }
        }

        let pivot_row = grid[r].clone();
        let pivot = pivot_row[c].clone();
        for (i, row) in grid.iter_mut().enumerate() {
            if i == r || (i < r && !mode.contains(Mode::ABOVE)) || row[c].is_zero() {
                continue;
            }

            let factor = row[c].checked_div(&pivot)?;
            for (cell, pivot_cell) in row.iter_mut().zip(&pivot_row) {
                *cell = cell.checked_sub(&factor.checked_mul(pivot_cell)?)?;
            }
        }

        if mode.contains(Mode::NORMALIZE) {
            for cell in grid[r].iter_mut() {
                *cell = cell.checked_div(&pivot)?;
            }
        }

        trace!(row = r, column = c, "found pivot");
        pivots.push((r, c));
        r += 1;
        c += 1;
    }

    Ok(Elimination { pivots, swaps })
}

/// One of the matrix reductions built on [`eliminate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    Rref,
    ToDiag,
    ToTriangle,
    Inv,
    Det,
    Rank,
}

/// The result of a [`Reduction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduced {
    Matrix(Matrix),
    Scalar(Rational),
    Count(usize),
}

impl Reduction {
    /// Every reduction, in the order they are registered.
    pub const ALL: [Reduction; 6] = [
        Reduction::Rref,
        Reduction::ToDiag,
        Reduction::ToTriangle,
        Reduction::Inv,
        Reduction::Det,
        Reduction::Rank,
    ];

    /// Returns the name of the builtin function for this reduction.
    pub fn name(self) -> &'static str {
        match self {
            Reduction::Rref => "rref",
            Reduction::ToDiag => "to_diag",
            Reduction::ToTriangle => "to_triangle",
            Reduction::Inv => "inv",
            Reduction::Det => "det",
            Reduction::Rank => "rank",
        }
    }

    /// Returns the elimination flags used by this reduction.
    pub fn mode(self) -> Mode {
        match self {
            Reduction::Rref | Reduction::Inv => Mode::NORMALIZE | Mode::ABOVE,
            Reduction::ToDiag => Mode::ABOVE | Mode::DIAGONAL,
            Reduction::Det | Reduction::Rank => Mode::ABOVE,
            Reduction::ToTriangle => Mode::DIAGONAL,
        }
    }

    /// Returns true if the reduction is only defined for square matrices.
    pub fn requires_square(self) -> bool {
        matches!(self, Reduction::Inv | Reduction::Det)
    }

    /// Applies the reduction to a copy of the given matrix.
    #[instrument(level = "debug", skip(matrix), fields(shape = ?matrix.shape()))]
    pub fn apply(self, matrix: &Matrix) -> Result<Reduced, MatrixError> {
        let (rows, cols) = matrix.shape();
        if self.requires_square() && rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }

        let mut grid = matrix.as_rows().to_vec();
        if self == Reduction::Inv {
            for (i, row) in grid.iter_mut().enumerate() {
                row.extend((0..cols).map(|j| if i == j { Rational::ONE } else { Rational::ZERO }));
            }
        }

        let elimination = eliminate(&mut grid, cols, self.mode())?;
        debug!(pivots = elimination.pivots.len(), swaps = elimination.swaps, "eliminated");

        match self {
            Reduction::Rref | Reduction::ToDiag | Reduction::ToTriangle => {
                Ok(Reduced::Matrix(Matrix::new(grid)?))
            },
            Reduction::Inv => {
                if elimination.pivots.len() < rows {
                    return Err(MatrixError::Singular);
                }
                let inverse = grid
                    .into_iter()
                    .map(|row| row[cols..].to_vec())
                    .collect();
                Ok(Reduced::Matrix(Matrix::new(inverse)?))
            },
            Reduction::Det => {
                if elimination.pivots.len() < rows {
                    return Ok(Reduced::Scalar(Rational::ZERO));
                }
                let mut det = if elimination.swaps % 2 == 0 {
                    Rational::ONE
                } else {
                    Rational::ONE.checked_neg()?
                };
                for (i, row) in grid.iter().enumerate() {
                    det = det.checked_mul(&row[i])?;
                }
                Ok(Reduced::Scalar(det))
            },
            Reduction::Rank => Ok(Reduced::Count(elimination.pivots.len())),
        }
    }
}

impl Display for Reduction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Matrix {
    /// Applies a reduction that produces a matrix.
    fn reduce_to_matrix(&self, reduction: Reduction) -> Result<Matrix, MatrixError> {
        match reduction.apply(self)? {
            Reduced::Matrix(matrix) => Ok(matrix),
            other => unreachable!("{} produced {:?}", reduction, other),
        }
    }

    /// Returns the reduced row echelon form of the matrix.
    pub fn rref(&self) -> Result<Matrix, MatrixError> {
        self.reduce_to_matrix(Reduction::Rref)
    }

    /// Eliminates every entry above and below each pivot, without normalizing the pivots.
    pub fn to_diag(&self) -> Result<Matrix, MatrixError> {
        self.reduce_to_matrix(Reduction::ToDiag)
    }

    /// Eliminates every entry below each pivot.
    pub fn to_triangle(&self) -> Result<Matrix, MatrixError> {
        self.reduce_to_matrix(Reduction::ToTriangle)
    }

    /// Returns the inverse of a square matrix.
    pub fn inv(&self) -> Result<Matrix, MatrixError> {
        self.reduce_to_matrix(Reduction::Inv)
    }

    /// Returns the determinant of a square matrix.
    pub fn det(&self) -> Result<Rational, MatrixError> {
        match Reduction::Det.apply(self)? {
            Reduced::Scalar(det) => Ok(det),
            other => unreachable!("det produced {:?}", other),
        }
    }

    /// Returns the number of pivots found by elimination.
    pub fn rank(&self) -> Result<usize, MatrixError> {
        match Reduction::Rank.apply(self)? {
            Reduced::Count(rank) => Ok(rank),
            other => unreachable!("rank produced {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn m<const R: usize, const C: usize>(rows: [[i64; C]; R]) -> Matrix {
        Matrix::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Rational::from).collect())
                .collect(),
        )
        .unwrap()
    }

    fn frac(numer: i64, denom: i64) -> Rational {
        Rational::new(numer, denom).unwrap()
    }

    #[test]
    fn rref_full_rank() {
        assert_eq!(m([[1, 2], [3, 4]]).rref().unwrap(), m([[1, 0], [0, 1]]));
    }

    #[test]
    fn rref_skips_columns_without_pivot() {
        let a = m([[0, 1, 2], [0, 2, 4], [0, 0, 1]]);
        assert_eq!(a.rref().unwrap(), m([[0, 1, 0], [0, 0, 1], [0, 0, 0]]));
        assert_eq!(a.rank().unwrap(), 2);
    }

    #[test]
    fn rref_rectangular() {
        let a = m([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a.rref().unwrap(), m([[1, 0, -1], [0, 1, 2]]));
    }

    #[test]
    fn to_diag() {
        assert_eq!(m([[2, 1], [4, 5]]).to_diag().unwrap(), m([[2, 0], [0, 3]]));
    }

    #[test]
    fn to_triangle_only_eliminates_below() {
        assert_eq!(
            m([[1, 2, 3], [2, 5, 3], [1, 0, 8]]).to_triangle().unwrap(),
            m([[1, 2, 3], [0, 1, -3], [0, 0, -1]]),
        );
    }

    #[test]
    fn diagonal_reductions_skip_rows_without_pivot() {
        let a = m([[0, 0], [0, 5]]);
        assert_eq!(a.to_diag().unwrap(), a);
        assert_eq!(a.to_triangle().unwrap(), a);
        assert_eq!(a.rref().unwrap(), m([[0, 1], [0, 0]]));

        let b = m([[0, 1, 2], [0, 2, 4], [0, 0, 1]]);
        assert_eq!(b.to_triangle().unwrap(), b);
        assert_eq!(b.to_diag().unwrap(), m([[0, 0, 0], [0, 2, 0], [0, 0, 1]]));
    }

    #[test]
    fn to_triangle_swaps_in_a_pivot() {
        assert_eq!(m([[0, 2], [3, 4]]).to_triangle().unwrap(), m([[3, 4], [0, 2]]));
    }

    #[test]
    fn inverse() {
        let inverse = m([[1, 2], [3, 4]]).inv().unwrap();
        let expected = Matrix::new(vec![
            vec![frac(-2, 1), frac(1, 1)],
            vec![frac(3, 2), frac(-1, 2)],
        ]).unwrap();
        assert_eq!(inverse, expected);
        assert_eq!(inverse.inv().unwrap(), m([[1, 2], [3, 4]]));
    }

    #[test]
    fn inverse_with_row_swap() {
        let a = m([[0, 1], [1, 0]]);
        assert_eq!(a.inv().unwrap(), a);
    }

    #[test]
    fn singular_inverse() {
        assert_eq!(m([[1, 2], [2, 4]]).inv(), Err(MatrixError::Singular));
    }

    #[test]
    fn non_square() {
        let a = m([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a.det(), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
        assert_eq!(a.inv(), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn determinant() {
        let a = m([[5, -6, -7, 7], [3, -2, 5, -17], [2, 4, -3, 29], [1, 1, -1, 1]]);
        assert_eq!(a.det().unwrap(), Rational::from(2368));
        assert_eq!(m([[1, 2], [3, 4]]).det().unwrap(), Rational::from(-2));
        assert_eq!(m([[7]]).det().unwrap(), Rational::from(7));
    }

    #[test]
    fn determinant_sign_follows_swaps() {
        assert_eq!(m([[0, 1], [1, 0]]).det().unwrap(), Rational::from(-1));
        assert_eq!(m([[0, 0, 1], [0, 1, 0], [1, 0, 0]]).det().unwrap(), Rational::from(-1));
    }

    #[test]
    fn determinant_of_singular_matrix_is_zero() {
        assert_eq!(m([[1, 2], [2, 4]]).det().unwrap(), Rational::ZERO);
    }

    #[test]
    fn rank() {
        assert_eq!(m([[1, 0], [0, 0]]).rank().unwrap(), 1);
        assert_eq!(m([[0, 0], [0, 0]]).rank().unwrap(), 0);
        assert_eq!(m([[1, 2], [2, 4], [3, 6]]).rank().unwrap(), 1);
    }

    #[test]
    fn input_is_not_modified() {
        let a = m([[0, 1], [1, 0]]);
        let copy = a.clone();
        a.rref().unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn flags() {
        assert_eq!(Reduction::Rref.mode(), Mode::NORMALIZE | Mode::ABOVE);
        assert_eq!(Reduction::ToTriangle.mode(), Mode::DIAGONAL);
        assert!(!Reduction::Rank.mode().contains(Mode::DIAGONAL));
    }
}
