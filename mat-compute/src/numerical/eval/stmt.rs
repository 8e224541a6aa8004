use mat_parser::parser::ast::{Let, Stmt};
use crate::numerical::{ctxt::Ctxt, error::Error, value::Value};
use std::io::Write;
use super::Eval;

impl Eval for Let {
    /// Evaluates the value and declares the variable. The declared value is returned.
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        let value = self.value.eval(ctxt)?;
        ctxt.declare(&self.name.name, value.clone())
            .map_err(|err| err.into_error(self.name.span.clone(), &[]))?;
        Ok(value)
    }
}

impl Eval for Stmt {
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        match self {
            Stmt::Let(let_stmt) => let_stmt.eval(ctxt),
            Stmt::Call(call) => call.eval(ctxt),
        }
    }
}
