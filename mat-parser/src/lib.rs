//! Tokenizer and parser for MatLang, a small language for exact matrix arithmetic.
//!
//! The [`tokenizer`] turns source code into [`Token`](tokenizer::Token)s, and the [`parser`]
//! turns those tokens into a list of [`Stmt`](parser::ast::Stmt)s. Expressions are not
//! parsed into operator trees; each one is kept as a flat [`Fragment`](parser::ast::Fragment)
//! of operands, operators, and parentheses, which the evaluator in `mat-compute` reduces with
//! the shunting-yard algorithm.

pub mod parser;
pub mod tokenizer;
