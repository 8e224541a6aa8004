use mat_parser::parser::ast::{LitNum, LitSym};
use crate::numerical::{ctxt::Ctxt, error::{kind::UndefinedVariable, Error}, value::Value};
use std::io::Write;
use super::Eval;

impl Eval for LitNum {
    fn eval<W: Write>(&self, _: &mut Ctxt<W>) -> Result<Value, Error> {
        Ok(Value::Integer(self.value))
    }
}

impl Eval for LitSym {
    /// Resolves the symbol to the value of a variable. If no variable has this name, but a
    /// builtin does, the symbol refers to the builtin itself.
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        if let Some(value) = ctxt.get_var(&self.name) {
            return Ok(value);
        }

        if ctxt.is_reserved(&self.name) {
            return Ok(Value::Symbol(self.name.clone()));
        }

        Err(Error::new(vec![self.span.clone()], UndefinedVariable {
            name: self.name.clone(),
        }))
    }
}
