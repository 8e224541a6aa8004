//! Property-based tests for the exact arithmetic and the elimination engine.

use mat_compute::linalg::Matrix;
use mat_compute::primitive::{Rational, Scalar};
use proptest::prelude::*;

/// Strategy for matrices with the given range of rows and columns and small integer entries.
fn arb_matrix(
    rows: std::ops::RangeInclusive<usize>,
    cols: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = Matrix> {
    (rows, cols)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(-5i64..=5, cols), rows)
        })
        .prop_map(|rows| {
            Matrix::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(Rational::from).collect())
                    .collect(),
            )
            .unwrap()
        })
}

/// Strategy for square matrices of size 1 to 4.
fn arb_square() -> impl Strategy<Value = Matrix> {
    (1usize..=4).prop_flat_map(|n| arb_matrix(n..=n, n..=n))
}

/// Returns the greatest common divisor of two non-negative integers.
fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn rational_is_canonical(numer in -1000i64..=1000, denom in -1000i64..=1000) {
        prop_assume!(denom != 0);
        let r = Rational::new(numer, denom).unwrap();
        prop_assert!(r.denom() > 0);
        prop_assert_eq!(gcd(r.numer().abs(), r.denom()), 1);
        // same value as the input fraction
        prop_assert_eq!(r.numer() as i128 * denom as i128, numer as i128 * r.denom() as i128);
    }

    #[test]
    fn rational_arithmetic_inverts(a in -100i64..=100, b in 1i64..=100, c in -100i64..=100, d in 1i64..=100) {
        let x = Rational::new(a, b).unwrap();
        let y = Rational::new(c, d).unwrap();
        prop_assert_eq!(x.checked_add(&y).unwrap().checked_sub(&y).unwrap(), x);
        if !y.is_zero() {
            prop_assert_eq!(x.checked_mul(&y).unwrap().checked_div(&y).unwrap(), x);
        }
    }

    #[test]
    fn rref_is_idempotent(a in arb_matrix(1..=4, 1..=4)) {
        let once = a.rref().unwrap();
        prop_assert_eq!(once.rref().unwrap(), once);
    }

    #[test]
    fn inverse_times_matrix_is_identity(a in arb_square()) {
        prop_assume!(!a.det().unwrap().is_zero());
        let identity = Matrix::identity(a.rows()).unwrap();
        let inv = a.inv().unwrap();
        prop_assert_eq!(inv.mul(&a).unwrap(), identity.clone());
        prop_assert_eq!(a.mul(&inv).unwrap(), identity);
    }

    #[test]
    fn determinant_is_multiplicative(
        (a, b) in (1usize..=3).prop_flat_map(|n| (arb_matrix(n..=n, n..=n), arb_matrix(n..=n, n..=n)))
    ) {
        let product = a.mul(&b).unwrap().det().unwrap();
        let expected = a.det().unwrap().checked_mul(&b.det().unwrap()).unwrap();
        prop_assert_eq!(product, expected);
    }

    #[test]
    fn singular_iff_zero_determinant(a in arb_square()) {
        let det = a.det().unwrap();
        prop_assert_eq!(a.inv().is_err(), det.is_zero());
        prop_assert_eq!(a.rank().unwrap() == a.rows(), !det.is_zero());
    }

    #[test]
    fn rank_is_bounded(a in arb_matrix(1..=5, 1..=5)) {
        let rank = a.rank().unwrap();
        prop_assert!(rank <= a.rows().min(a.cols()));
        prop_assert_eq!(rank, a.transpose().rank().unwrap());
    }
}

#[test]
fn zero_matrix_has_rank_zero() {
    for (rows, cols) in [(1, 1), (2, 3), (4, 2)] {
        let zero = Matrix::new(vec![vec![Rational::ZERO; cols]; rows]).unwrap();
        assert_eq!(zero.rank().unwrap(), 0);
        assert_eq!(zero.rref().unwrap(), zero);
    }
}
