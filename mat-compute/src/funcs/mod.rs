//! All builtin functions and operators.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method. This
//! method can be used to evaluate the function in Rust code when the types of the arguments are
//! known at compile time. The [`Builtin`] trait is also implemented for each function, enabling
//! the function to be evaluated with arbitrary arguments at runtime after type checking.
//!
//! # Example
//!
//! ```
//! use mat_compute::funcs::arithmetic::Add;
//! use mat_compute::numerical::value::Value;
//!
//! // evaluate 1 + 2 using `eval_static`
//! let result = Add::eval_static(Value::Integer(1), Value::Integer(2)).unwrap();
//! assert_eq!(result, Value::Integer(3));
//!
//! // evaluate 1 + 2 through the context, which looks the operator up by name
//! use mat_compute::numerical::ctxt::Ctxt;
//! let mut ctxt = Ctxt::with_output(Vec::new());
//! let result = ctxt.invoke("+", vec![Value::Integer(1), Value::Integer(2)]).unwrap();
//! assert_eq!(result, Value::Integer(3));
//! ```

pub mod arithmetic;
pub mod print;
pub mod transform;
pub mod transpose;

use crate::linalg::Reduction;
use crate::numerical::{builtin::Builtin, ctxt::Registry};

/// Returns every builtin function and operator, keyed by name.
pub fn all() -> Registry {
    use arithmetic::*;
    use print::*;
    use transform::*;
    use transpose::*;

    macro_rules! build {
        ($($upname:expr),* $(,)?) => {
            [
                $(
                    Box::new($upname) as Box<dyn Builtin>,
                )*
            ]
                .into_iter()
                .chain(Reduction::ALL.into_iter().map(|r| Box::new(LinearTransform(r)) as Box<dyn Builtin>))
                .map(|builtin| (builtin.name(), builtin))
                .collect()
        };
    }

    build! {
        Add,
        Sub,
        Mul,
        Div,
        Print,
        Transpose,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn registry_names() {
        let mut names = all().into_keys().collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "*", "+", "-", "/",
                "det", "inv", "print", "rank", "rref", "to_diag", "to_triangle", "transpose",
            ],
        );
    }
}
