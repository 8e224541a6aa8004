use crate::linalg::Matrix;
use crate::numerical::{builtin::{error::BuiltinError, Arity, Builtin}, value::Value};
use std::io::Write;

/// Returns the transpose of a matrix.
#[derive(Debug)]
pub struct Transpose;

impl Transpose {
    pub fn eval_static(matrix: &Matrix) -> Matrix {
        matrix.transpose()
    }
}

impl Builtin for Transpose {
    fn name(&self) -> &'static str {
        "transpose"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, _: &mut dyn Write, args: Vec<Value>) -> Result<Value, BuiltinError> {
        match args.first() {
            Some(Value::Matrix(matrix)) => Ok(Value::Matrix(Self::eval_static(matrix))),
            other => Err(BuiltinError::TypeMismatch {
                name: self.name().to_string(),
                index: 0,
                expected: "Matrix",
                given: other.map_or("Unit", Value::typename),
            }),
        }
    }
}
