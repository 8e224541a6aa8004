//! Evaluation of MatLang scripts.
//!
//! MatLang computes with exact rational numbers and matrices of rationals; there is no floating
//! point anywhere. This crate contains:
//!
//! - [`primitive`]: the [`Rational`](primitive::Rational) scalar type and the
//!   [`Scalar`](primitive::Scalar) trait.
//! - [`linalg`]: the [`Matrix`](linalg::Matrix) type and the Gaussian elimination engine behind
//!   `rref`, `to_diag`, `to_triangle`, `inv`, `det`, and `rank`.
//! - [`funcs`]: the builtin functions and operators.
//! - [`numerical`]: the value model, the evaluation context, and the evaluator.
//!
//! # Example
//!
//! ```
//! use mat_compute::{numerical::{ctxt::Ctxt, value::Value}, run_script};
//!
//! let mut ctxt = Ctxt::with_output(Vec::new());
//! let result = run_script("let A = [[1, 2], [3, 4]]; print(det(A)); let B = inv(A);", &mut ctxt).unwrap();
//! assert_eq!(result.to_string(), "-2\t1\n3/2\t-1/2");
//! assert_eq!(String::from_utf8(ctxt.into_output()).unwrap(), "-2\n");
//! ```

pub mod funcs;
pub mod linalg;
pub mod numerical;
pub mod primitive;

use mat_parser::parser::parse_script;
use numerical::{ctxt::Ctxt, error::Error, eval::eval_stmts, value::Value};
use std::io::Write;

/// Parses and evaluates a script in the given context, returning the value of the last
/// statement.
///
/// The script is parsed in full before anything is evaluated, so a syntax error anywhere means no
/// statement runs.
pub fn run_script<W: Write>(source: &str, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
    let stmts = parse_script(source)?;
    eval_stmts(&stmts, ctxt)
}
