mod call;
mod expr;
mod literal;
mod matrix;
pub mod postfix;
mod stmt;

use mat_parser::parser::ast::Stmt;
use std::io::Write;
use super::{ctxt::Ctxt, error::Error, value::Value};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the item to produce a value, using the given context.
    fn eval<W: Write>(&self, ctxt: &mut Ctxt<W>) -> Result<Value, Error>;

    /// Evaluate the item to produce a value, using a new context that writes to stdout.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&mut Ctxt::default())
    }
}

/// Evaluates the statements in order, returning the value of the last one, or [`Value::Unit`] if
/// there are none.
///
/// Evaluation stops at the first error. Declarations made before the failing statement remain in
/// the context.
pub fn eval_stmts<W: Write>(stmts: &[Stmt], ctxt: &mut Ctxt<W>) -> Result<Value, Error> {
    let mut last = Value::Unit;
    for stmt in stmts {
        last = stmt.eval(ctxt)?;
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use mat_error::Category;
    use mat_parser::parser::parse_script;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Runs a script, returning the value of its last statement and everything it printed.
    fn run(source: &str) -> Result<(Value, String), Error> {
        let stmts = parse_script(source)?;
        let mut ctxt = Ctxt::with_output(Vec::new());
        let value = eval_stmts(&stmts, &mut ctxt)?;
        Ok((value, String::from_utf8(ctxt.into_output()).unwrap()))
    }

    fn output(source: &str) -> String {
        run(source).unwrap().1
    }

    fn category(source: &str) -> Category {
        run(source).unwrap_err().category()
    }

    #[test]
    fn print_matrix() {
        assert_eq!(output("let A = [[1,2],[2,1]]; print(A);"), "1\t2\n2\t1\n");
    }

    #[test]
    fn grouping() {
        assert_eq!(output("print(1 * (2 + 3));"), "5\n");
    }

    #[test]
    fn matrix_difference() {
        let source = "let A=[[1,2],[2,1],[1,3]]; let B=[[7,-1],[5,0],[4,-3]]; print(A-B);";
        assert_eq!(output(source), "-6\t3\n-3\t1\n-3\t6\n");
    }

    #[test]
    fn determinant() {
        assert_eq!(
            output("print(det([[5,-6,-7,7],[3,-2,5,-17],[2,4,-3,29],[1,1,-1,1]]));"),
            "2368\n",
        );
    }

    #[test]
    fn rank() {
        assert_eq!(output("print(rank([[1,0],[0,0]]));"), "1\n");
    }

    #[test]
    fn double_inverse() {
        assert_eq!(output("print(inv(inv([[1,2],[3,4]])));"), "1\t2\n3\t4\n");
    }

    #[test]
    fn inverse_has_fractions() {
        assert_eq!(output("print(inv([[1,2],[3,4]]));"), "-2\t1\n3/2\t-1/2\n");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(output("print(8 - 4 - 2, 8 / 4 * 2, 1 / 3 + 1 / 6, 2 -3, -(1 + 2), 2 * -3);"), "2\n4\n1/2\n-1\n-3\n-6\n");
    }

    #[test]
    fn smallest_integer_literal() {
        assert_eq!(output("print(-9223372036854775808);"), "-9223372036854775808\n");
        assert_eq!(run("print(-(-9223372036854775808));").unwrap_err().message(), "arithmetic overflow");
        assert_eq!(run("print(- 9223372036854775808);").unwrap_err().message(), "integer literal is too large");
    }

    #[test]
    fn last_statement_value() {
        assert_eq!(run("let x = 3; let y = x * x;").unwrap().0, Value::Integer(9));
        assert_eq!(run("print(1);").unwrap().0, Value::Unit);
        assert_eq!(run("").unwrap().0, Value::Unit);
    }

    #[test]
    fn init_is_long_form_let() {
        assert_eq!(output("init(x, 2 * 3); print(x + 1);"), "7\n");
        assert_eq!(output("let x = 1; init(x, x + 1); print(x);"), "2\n");
    }

    #[test]
    fn variables_can_be_redeclared() {
        assert_eq!(output("let x = 1; let x = x + 1; print(x);"), "2\n");
    }

    #[test]
    fn matrix_elements_are_expressions() {
        assert_eq!(output("let x = 2; print([[x * x, det([[2]])], [1 / 2, -x]]);"), "4\t2\n1/2\t-2\n");
    }

    #[test]
    fn scalar_matrix_products() {
        assert_eq!(output("let A = [[1, 2]]; print(2 * A, A * 2, A / 2);"), "2\t4\n2\t4\n1/2\t1\n");
        assert_eq!(output("print([[1, 2]] * transpose([[3, 4]]));"), "11\n");
    }

    #[test]
    fn reductions() {
        let source = "let A = [[1, 2, 3], [4, 5, 6]]; print(rref(A), rank(A));";
        assert_eq!(output(source), "1\t0\t-1\n0\t1\t2\n2\n");
        assert_eq!(output("print(to_diag([[2, 0], [4, 3]]));"), "2\t0\n0\t3\n");
        assert_eq!(output("print(to_triangle([[1, 2], [3, 4]]));"), "1\t2\n0\t-2\n");
    }

    #[test]
    fn rank_deficient_reductions() {
        let source = "print(to_triangle([[0, 2], [3, 4]]), to_diag([[0, 0], [0, 5]]));";
        assert_eq!(output(source), "3\t4\n0\t2\n0\t0\n0\t5\n");
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(category("print(1)"), Category::Syntax);
        assert_eq!(category("let = 1;"), Category::Syntax);
        assert_eq!(category("print([[1, 2], [3]]);"), Category::Syntax);
        assert_eq!(category("print([]);"), Category::Syntax);
        assert_eq!(category("print([[1, [2]]]);"), Category::Syntax);
    }

    #[test]
    fn name_errors() {
        assert_eq!(category("print(y);"), Category::Name);
        assert_eq!(category("dett([[1]]);"), Category::Name);
        assert_eq!(category("let det = 1;"), Category::Name);
        assert_eq!(category("init(rank, 1);"), Category::Name);
    }

    #[test]
    fn runtime_errors() {
        assert_eq!(category("print(1 / 0);"), Category::Runtime);
        assert_eq!(category("print([[1, 2]] + [[1], [2]]);"), Category::Runtime);
        assert_eq!(category("print(det([[1, 2, 3]]));"), Category::Runtime);
        assert_eq!(category("print(inv([[1, 2], [2, 4]]));"), Category::Runtime);
        assert_eq!(category("print(det(1));"), Category::Runtime);
        assert_eq!(category("print(det([[1]], [[2]]));"), Category::Runtime);
        assert_eq!(category("print(transpose());"), Category::Runtime);
        assert_eq!(category("print(1 + [[1]]);"), Category::Runtime);
        assert_eq!(category("print([[det]]);"), Category::Runtime);
        assert_eq!(category("print(-det);"), Category::Runtime);
        assert_eq!(category("init(1, 2);"), Category::Runtime);
    }

    #[test]
    fn bare_builtin_is_a_symbol() {
        assert_eq!(output("print(det);"), "det\n");
    }

    #[test]
    fn errors_stop_evaluation() {
        let stmts = parse_script("let a = 1; print(a); let b = 1 / 0; print(b);").unwrap();
        let mut ctxt = Ctxt::with_output(Vec::new());
        assert!(eval_stmts(&stmts, &mut ctxt).is_err());
        assert_eq!(ctxt.get_var("a"), Some(Value::Integer(1)));
        assert_eq!(ctxt.get_var("b"), None);
        assert_eq!(String::from_utf8(ctxt.into_output()).unwrap(), "1\n");
    }
}
