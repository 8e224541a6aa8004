use mat_parser::parser::ast::{Call, Fragment, Operand};
use crate::numerical::{ctxt::Ctxt, error::Error, value::Value};
use std::io::Write;
use super::Eval;

/// Returns true if the argument at `index` of a call to `name` names a variable to declare,
/// rather than a value.
fn is_declared_name(name: &str, index: usize) -> bool {
    name == "init" && index == 0
}

impl Eval for Call {
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
        let mut args = Vec::with_capacity(self.args.len());
        for (index, arg) in self.args.iter().enumerate() {
            if is_declared_name(&self.name.name, index) {
                if let Some(Operand::Symbol(symbol)) = arg.as_single_operand() {
                    args.push(Value::Symbol(symbol.name.clone()));
                    continue;
                }
            }

            args.push(arg.eval(ctxt)?);
        }

        ctxt.invoke(&self.name.name, args)
            .map_err(|err| {
                let spans = self.args.iter().map(Fragment::span).collect::<Vec<_>>();
                err.into_error(self.name.span.clone(), &spans)
            })
    }
}
