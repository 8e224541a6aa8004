//! Conversion of an infix [`Fragment`](mat_parser::parser::ast::Fragment) to postfix order.

use mat_parser::parser::{
    ast::{Item, Operand},
    token::op::{BinOp, UnaryOp},
    Precedence,
};
use std::ops::Range;
use tracing::trace;

/// An item of a fragment in postfix order. Parentheses never appear in postfix order.
#[derive(Debug, Clone, Copy)]
pub enum Postfix<'a> {
    Operand(&'a Operand),
    Binary(&'a BinOp),
    Unary(&'a UnaryOp),
}

/// An entry of the operator stack.
#[derive(Debug)]
enum Pending<'a> {
    Binary(&'a BinOp),
    Unary(&'a UnaryOp),
    Paren(Range<usize>),
}

impl<'a> Pending<'a> {
    /// Returns the precedence of the entry. An open parenthesis has the lowest precedence, so no
    /// operator pops past it.
    fn precedence(&self) -> Precedence {
        match self {
            Pending::Binary(op) => op.precedence(),
            Pending::Unary(op) => op.precedence(),
            Pending::Paren(_) => Precedence::Any,
        }
    }

    /// Converts the entry to its postfix form. Returns the span of the parenthesis if the entry
    /// is an open parenthesis.
    fn into_postfix(self) -> Result<Postfix<'a>, Range<usize>> {
        match self {
            Pending::Binary(op) => Ok(Postfix::Binary(op)),
            Pending::Unary(op) => Ok(Postfix::Unary(op)),
            Pending::Paren(span) => Err(span),
        }
    }
}

/// Reorders the items of a fragment from infix to postfix order, using the shunting-yard
/// algorithm.
///
/// Binary operators are left-associative: an incoming binary operator first moves every stacked
/// operator of equal or higher precedence to the output. Unary operators are right-associative
/// and are stacked without moving anything.
///
/// Returns the span of the offending parenthesis if the parentheses are unbalanced.
pub fn to_postfix(items: &[Item]) -> Result<Vec<Postfix<'_>>, Range<usize>> {
    let mut output = Vec::with_capacity(items.len());
    let mut stack: Vec<Pending> = Vec::new();

    for item in items {
        match item {
            Item::Operand(operand) => output.push(Postfix::Operand(operand)),
            Item::Unary(op) => stack.push(Pending::Unary(op)),
            Item::Binary(op) => {
                while let Some(top) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        output.push(top.into_postfix()?);
                    }
                }
                stack.push(Pending::Binary(op));
            },
            Item::OpenParen(span) => stack.push(Pending::Paren(span.clone())),
            Item::CloseParen(span) => loop {
                match stack.pop() {
                    Some(Pending::Paren(_)) => break,
                    Some(top) => output.push(top.into_postfix()?),
                    None => return Err(span.clone()),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top.into_postfix()?);
    }

    trace!(?output, "converted to postfix");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use mat_parser::parser::{ast::{Fragment, Terminator}, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses a fragment and renders its postfix order as text.
    fn postfix(source: &str) -> String {
        let mut parser = Parser::new(source);
        let fragment = Fragment::parse_until(&mut parser, Terminator::Semicolon).unwrap();
        to_postfix(&fragment.items)
            .unwrap()
            .into_iter()
            .map(|item| match item {
                Postfix::Operand(operand) => operand.to_string(),
                Postfix::Binary(op) => op.to_string(),
                Postfix::Unary(op) => format!("{}u", op),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn precedence() {
        assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
        assert_eq!(postfix("1 * 2 + 3"), "1 2 * 3 +");
    }

    #[test]
    fn left_associative() {
        assert_eq!(postfix("8 - 4 - 2"), "8 4 - 2 -");
        assert_eq!(postfix("8 / 4 * 2"), "8 4 / 2 *");
    }

    #[test]
    fn parentheses() {
        assert_eq!(postfix("1 * (2 + 3)"), "1 2 3 + *");
        assert_eq!(postfix("((1 + 9) / 5) * 3"), "1 9 + 5 / 3 *");
    }

    #[test]
    fn unary_signs() {
        assert_eq!(postfix("-a * b"), "a -u b *");
        assert_eq!(postfix("2 * -x"), "2 x -u *");
        assert_eq!(postfix("2 * -3"), "2 -3 *");
        assert_eq!(postfix("- -x"), "x -u -u");
        assert_eq!(postfix("-(1 + 2)"), "1 2 + -u");
    }

    #[test]
    fn unbalanced_parentheses() {
        let items = vec![Item::OpenParen(0..1)];
        assert_eq!(to_postfix(&items).unwrap_err(), 0..1);

        let items = vec![Item::CloseParen(3..4)];
        assert_eq!(to_postfix(&items).unwrap_err(), 3..4);
    }
}
