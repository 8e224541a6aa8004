use mat_parser::parser::{
    ast::{Fragment, Operand},
    token::op::{UnaryOp, UnaryOpKind},
};
use crate::numerical::{
    builtin::error::BuiltinError,
    ctxt::Ctxt,
    error::{kind::{InvalidUnaryOperation, MalformedExpression}, Error},
    value::Value,
};
use std::{io::Write, ops::Range};
use super::{postfix::{to_postfix, Postfix}, Eval};

impl Eval for Operand {
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        match self {
            Operand::Number(num) => num.eval(ctxt),
            Operand::Symbol(sym) => sym.eval(ctxt),
            Operand::Call(call) => call.eval(ctxt),
            Operand::Matrix(matrix) => matrix.eval(ctxt),
        }
    }
}

/// Applies a unary sign operator. Both signs accept scalars and matrices only.
fn eval_unary(op: &UnaryOp, operand: Value, span: Range<usize>) -> Result<Value, Error> {
    let typename = operand.typename();
    let invalid = || Error::new(vec![op.span.clone(), span.clone()], InvalidUnaryOperation {
        op: op.kind.symbol(),
        operand: typename,
    });

    match op.kind {
        UnaryOpKind::Pos => match operand {
            Value::Integer(_) | Value::Rational(_) | Value::Matrix(_) => Ok(operand),
            _ => Err(invalid()),
        },
        UnaryOpKind::Neg => match operand.checked_neg() {
            Some(result) => result.map_err(|err| {
                BuiltinError::matrix("-", err).into_error(op.span.clone(), &[span.clone()])
            }),
            None => Err(invalid()),
        },
    }
}

impl Eval for Fragment {
    /// Evaluates the fragment by converting it to postfix order and reducing it on a stack.
    ///
    /// Binary operators are looked up in the context by their symbol and invoked with the left
    /// and right operands.
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        if let Some(operand) = self.as_single_operand() {
            return operand.eval(ctxt);
        }

        let malformed = || Error::new(vec![self.span()], MalformedExpression);
        let postfix = to_postfix(&self.items)
            .map_err(|span| Error::new(vec![span], MalformedExpression))?;

        // each value is kept with the span of the source it was computed from
        let mut stack: Vec<(Value, Range<usize>)> = Vec::with_capacity(postfix.len());
        for item in postfix {
            match item {
                Postfix::Operand(operand) => {
                    let value = operand.eval(ctxt)?;
                    stack.push((value, operand.span()));
                },
                Postfix::Binary(op) => {
                    let (Some((right, right_span)), Some((left, left_span))) = (stack.pop(), stack.pop()) else {
                        return Err(malformed());
                    };
                    let span = left_span.start..right_span.end;
                    let value = ctxt.invoke(op.kind.symbol(), vec![left, right])
                        .map_err(|err| err.into_error(op.span.clone(), &[left_span, right_span]))?;
                    stack.push((value, span));
                },
                Postfix::Unary(op) => {
                    let Some((operand, operand_span)) = stack.pop() else {
                        return Err(malformed());
                    };
                    let span = op.span.start..operand_span.end;
                    stack.push((eval_unary(op, operand, operand_span)?, span));
                },
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some((value, _)), true) => Ok(value),
            _ => Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use mat_parser::parser::{ast::Terminator, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval(source: &str) -> Result<Value, Error> {
        let mut parser = Parser::new(source);
        let fragment = Fragment::parse_until(&mut parser, Terminator::Semicolon).unwrap();
        fragment.eval(&mut Ctxt::with_output(Vec::new()))
    }

    #[test]
    fn binary_and_unary() {
        assert_eq!(eval("3 * -5 / 5 + 6").unwrap(), Value::Integer(3));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval("((1 + 9) / 5) * 3").unwrap(), Value::Integer(6));
    }

    #[test]
    fn unary_plus_is_identity() {
        assert_eq!(eval("+4 - +1").unwrap(), Value::Integer(3));
    }

    #[test]
    fn negated_matrix() {
        assert_eq!(eval("-[[1, -2]]").unwrap(), eval("[[-1, 2]]").unwrap());
    }

    #[test]
    fn operator_error_spans() {
        let err = eval("[[1]] + 2").unwrap_err();
        assert_eq!(err.spans, vec![0..5, 6..7, 8..9]);
    }

    #[test]
    fn division_by_zero_covers_the_operation() {
        let err = eval("1 + 4 / (2 - 2)").unwrap_err();
        assert_eq!(err.message(), "division by zero");
        assert_eq!(err.spans, vec![4..14]);
    }

    #[test]
    fn unary_error_spans() {
        let err = eval("1 + -print").unwrap_err();
        assert_eq!(err.spans, vec![4..5, 5..10]);
        assert_eq!(err.message(), "cannot apply the `-` operator to this operand");
    }

    #[test]
    fn negation_overflow() {
        let err = eval("-(-9223372036854775807 - 1)").unwrap_err();
        assert_eq!(err.message(), "arithmetic overflow");
    }
}
