use mat_parser::parser::ast::MatrixLit;
use crate::linalg::{Matrix, MatrixError};
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::{EmptyMatrix, NonScalarElement, RaggedMatrix}, Error},
    value::Value,
};
use std::io::Write;
use super::Eval;

impl Eval for MatrixLit {
    /// Evaluates every element, row by row, then builds the matrix. Every element must be a
    /// scalar, and every row must have the same length as the first.
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut values = Vec::with_capacity(row.elements.len());
            for element in &row.elements {
                let value = element.eval(ctxt)?;
                match value.as_rational() {
                    Some(value) => values.push(value),
                    None => return Err(Error::new(vec![element.span()], NonScalarElement {
                        given: value.typename(),
                    })),
                }
            }
            rows.push(values);
        }

        Matrix::new(rows)
            .map(Value::Matrix)
            .map_err(|err| match err {
                MatrixError::Ragged { row, expected, found } => Error::new(
                    vec![self.rows[0].span.clone(), self.rows[row].span.clone()],
                    RaggedMatrix { expected, found },
                ),
                _ => Error::new(vec![self.span.clone()], EmptyMatrix),
            })
    }
}
