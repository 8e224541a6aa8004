use crate::linalg::MatrixError;
use crate::numerical::error::{kind, Error};
use crate::primitive::ArithmeticError;
use std::{io, ops::Range};

/// Represents an error that can occur while invoking a builtin function or operator.
///
/// These errors do not carry any spans. The evaluator attaches spans with
/// [`BuiltinError::into_error`] once it knows where the invocation appeared in the source.
#[derive(Debug)]
pub enum BuiltinError {
    /// No builtin with this name exists.
    UndefinedFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// A declaration used the name of a builtin.
    ReservedName {
        name: String,
    },

    /// The function was called with too many arguments.
    TooManyArguments {
        name: String,
        expected: usize,
        given: usize,
    },

    /// An argument to the function call is missing.
    MissingArgument {
        name: String,
        index: usize,
        expected: usize,
        given: usize,
    },

    /// The function was called with a mismatched argument type.
    TypeMismatch {
        name: String,
        index: usize,
        expected: &'static str,
        given: &'static str,
    },

    /// A binary operator does not support this pairing of operand types.
    InvalidBinaryOperation {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// A scalar computation failed.
    Arithmetic(ArithmeticError),

    /// A matrix operation failed.
    Matrix {
        name: &'static str,
        err: MatrixError,
    },

    /// Writing to the output failed.
    Output(io::Error),
}

impl From<ArithmeticError> for BuiltinError {
    fn from(err: ArithmeticError) -> Self {
        BuiltinError::Arithmetic(err)
    }
}

impl From<io::Error> for BuiltinError {
    fn from(err: io::Error) -> Self {
        BuiltinError::Output(err)
    }
}

impl BuiltinError {
    /// Wraps a [`MatrixError`] raised by the function `name`.
    pub fn matrix(name: &'static str, err: MatrixError) -> Self {
        match err {
            MatrixError::Arithmetic(err) => BuiltinError::Arithmetic(err),
            err => BuiltinError::Matrix { name, err },
        }
    }

    /// Converts this error into an [`Error`] pointing at the source.
    ///
    /// `callee` is the span of the function name or operator symbol, and `args` are the spans of
    /// the arguments or operands, in order.
    pub fn into_error(self, callee: Range<usize>, args: &[Range<usize>]) -> Error {
        // the whole invocation, from the earliest span to the latest
        let outer = args.iter().fold(callee.clone(), |acc, span| {
            acc.start.min(span.start)..acc.end.max(span.end)
        });
        let arg = |index: usize| args.get(index).cloned().unwrap_or_else(|| callee.clone());

        match self {
            BuiltinError::UndefinedFunction { name, suggestions } => {
                Error::new(vec![callee.clone()], kind::UndefinedFunction { name, suggestions })
            },
            BuiltinError::ReservedName { name } => {
                Error::new(vec![arg(0)], kind::ReservedName { name })
            },
            BuiltinError::TooManyArguments { name, expected, given } => {
                Error::new(vec![outer], kind::TooManyArguments { name, expected, given })
            },
            BuiltinError::MissingArgument { name, index, expected, given } => {
                Error::new(vec![outer], kind::MissingArgument { name, index, expected, given })
            },
            BuiltinError::TypeMismatch { name, index, expected, given } => Error::new(
                vec![callee.clone(), arg(index)],
                kind::TypeMismatch { name, index, expected, given },
            ),
            BuiltinError::InvalidBinaryOperation { op, left, right } => Error::new(
                vec![arg(0), callee.clone(), arg(1)],
                kind::InvalidBinaryOperation { op, left, right },
            ),
            BuiltinError::Arithmetic(ArithmeticError::Overflow) => {
                Error::new(vec![outer], kind::Overflow)
            },
            BuiltinError::Arithmetic(ArithmeticError::DivisionByZero) => {
                Error::new(vec![outer], kind::DivisionByZero)
            },
            BuiltinError::Matrix { name, err } => match err {
                MatrixError::ShapeMismatch { op, left, right } => Error::new(
                    vec![arg(0), callee.clone(), arg(1)],
                    kind::ShapeMismatch { op, left, right },
                ),
                MatrixError::NotSquare { rows, cols } => Error::new(
                    vec![callee.clone(), arg(0)],
                    kind::NotSquare { name: name.to_string(), rows, cols },
                ),
                MatrixError::Singular => {
                    Error::new(vec![callee.clone(), arg(0)], kind::SingularMatrix)
                },
                MatrixError::Empty => Error::new(vec![outer], kind::EmptyMatrix),
                MatrixError::Ragged { expected, found, .. } => {
                    Error::new(vec![outer], kind::RaggedMatrix { expected, found })
                },
                MatrixError::Arithmetic(err) => BuiltinError::Arithmetic(err).into_error(callee.clone(), args),
            },
            BuiltinError::Output(err) => {
                Error::new(vec![outer], kind::OutputFailed { reason: err.to_string() })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use mat_error::Category;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn binary_operation_spans() {
        let err = BuiltinError::InvalidBinaryOperation { op: "+", left: "Matrix", right: "Integer" }
            .into_error(4..5, &[0..3, 6..7]);
        assert_eq!(err.spans, vec![0..3, 4..5, 6..7]);
        assert_eq!(err.category(), Category::Runtime);
        assert_eq!(err.message(), "cannot apply the `+` operator to these operands");
    }

    #[test]
    fn arity_errors_cover_the_call() {
        let err = BuiltinError::TooManyArguments { name: "det".to_string(), expected: 1, given: 2 }
            .into_error(0..3, &[4..9, 11..12]);
        assert_eq!(err.spans, vec![0..12]);
    }

    #[test]
    fn reserved_name_points_at_the_name() {
        let err = BuiltinError::ReservedName { name: "det".to_string() }
            .into_error(0..4, &[5..8, 10..11]);
        assert_eq!(err.spans, vec![5..8]);
        assert_eq!(err.category(), Category::Name);

        let err = BuiltinError::ReservedName { name: "rank".to_string() }.into_error(4..8, &[]);
        assert_eq!(err.spans, vec![4..8]);
    }

    #[test]
    fn matrix_arithmetic_is_unwrapped() {
        let err = BuiltinError::matrix("inv", MatrixError::Arithmetic(ArithmeticError::DivisionByZero));
        assert!(matches!(err, BuiltinError::Arithmetic(ArithmeticError::DivisionByZero)));
        assert_eq!(err.into_error(0..1, &[]).message(), "division by zero");
    }

    #[test]
    fn singular_matrix() {
        let err = BuiltinError::matrix("inv", MatrixError::Singular).into_error(0..3, &[4..17]);
        assert_eq!(err.spans, vec![0..3, 4..17]);
        assert_eq!(err.message(), "singular matrix");
    }
}
