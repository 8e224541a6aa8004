use crate::numerical::{builtin::{error::BuiltinError, Arity, Builtin}, value::Value};
use std::io::Write;

/// Prints each given value to the output, each followed by a newline.
#[derive(Debug)]
pub struct Print;

impl Print {
    pub fn eval_static(out: &mut dyn Write, values: &[Value]) -> Result<(), BuiltinError> {
        for value in values {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}

impl Builtin for Print {
    fn name(&self) -> &'static str {
        "print"
    }

    fn arity(&self) -> Arity {
        Arity::Variadic
    }

    fn eval(&self, out: &mut dyn Write, args: Vec<Value>) -> Result<Value, BuiltinError> {
        Self::eval_static(out, &args)?;
        Ok(Value::Unit)
    }
}

#[cfg(test)]
mod tests {
    use crate::linalg::Matrix;
    use crate::primitive::Rational;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn prints_each_argument_on_its_own_line() {
        let matrix = Matrix::new(vec![
            vec![Rational::from(1), Rational::from(2)],
            vec![Rational::from(2), Rational::from(1)],
        ]).unwrap();

        let mut out = Vec::new();
        let result = Print.eval(&mut out, vec![Value::Matrix(matrix), Value::Unit]).unwrap();
        assert_eq!(result, Value::Unit);
        assert_eq!(String::from_utf8(out).unwrap(), "1\t2\n2\t1\n()\n");
    }

    #[test]
    fn no_arguments_prints_nothing() {
        let mut out = Vec::new();
        Print.eval(&mut out, vec![]).unwrap();
        assert!(out.is_empty());
    }
}
