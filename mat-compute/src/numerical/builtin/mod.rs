pub mod error;

use error::BuiltinError;
use std::io::Write;
use super::value::Value;

/// The number of arguments a builtin function accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),

    /// Any number of arguments, including none.
    Variadic,
}

impl Arity {
    /// Checks that `given` arguments satisfy this arity for the function `name`.
    pub fn check(self, name: &str, given: usize) -> Result<(), BuiltinError> {
        match self {
            Arity::Exact(expected) if given > expected => Err(BuiltinError::TooManyArguments {
                name: name.to_string(),
                expected,
                given,
            }),
            Arity::Exact(expected) if given < expected => Err(BuiltinError::MissingArgument {
                name: name.to_string(),
                index: given,
                expected,
                given,
            }),
            Arity::Exact(_) | Arity::Variadic => Ok(()),
        }
    }
}

/// A trait implemented by all builtin functions and operators.
pub trait Builtin: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// The number of arguments the function accepts. This is checked before [`Builtin::eval`] is
    /// called.
    fn arity(&self) -> Arity;

    /// Evaluates the function. Anything the function prints is written to `out`.
    fn eval(&self, out: &mut dyn Write, args: Vec<Value>) -> Result<Value, BuiltinError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn exact_arity() {
        assert!(Arity::Exact(1).check("det", 1).is_ok());
        assert!(matches!(
            Arity::Exact(1).check("det", 2),
            Err(BuiltinError::TooManyArguments { expected: 1, given: 2, .. }),
        ));
        assert!(matches!(
            Arity::Exact(2).check("+", 1),
            Err(BuiltinError::MissingArgument { index: 1, expected: 2, given: 1, .. }),
        ));
    }

    #[test]
    fn variadic_arity() {
        assert_eq!(Arity::Variadic.check("print", 0).is_ok(), true);
        assert_eq!(Arity::Variadic.check("print", 12).is_ok(), true);
    }
}
