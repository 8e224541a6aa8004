use crate::{
    parser::{
        ast::{call::Call, literal::{LitNum, LitSym}, matrix::MatrixLit},
        error::{
            CommaInGroup,
            EmptyExpression,
            Error,
            ExpectedOperator,
            MissingSemicolon,
            NestedVector,
            UnclosedParenthesis,
            UnexpectedToken,
        },
        token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind},
        Parser,
    },
    tokenizer::{Token, TokenKind},
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tokens that may appear where an operand is expected.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Name,
    TokenKind::OpenParen,
    TokenKind::OpenSquare,
    TokenKind::Add,
    TokenKind::Sub,
];

/// The tokens that may appear after an operand.
const AFTER_OPERAND: &[TokenKind] = &[
    TokenKind::Add,
    TokenKind::Sub,
    TokenKind::Mul,
    TokenKind::Div,
    TokenKind::CloseParen,
    TokenKind::Comma,
    TokenKind::CloseSquare,
    TokenKind::Semicolon,
];

/// Determines which tokens end an expression fragment at parenthesis depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The right-hand side of a declaration, ended by `;`.
    Semicolon,

    /// A call argument, ended by `,` or `)`.
    Arg,

    /// A matrix element, ended by `,` or `]`.
    Element,
}

impl Terminator {
    /// Returns true if the given token ends a fragment with this terminator.
    fn ends_at(self, kind: TokenKind) -> bool {
        match self {
            Self::Semicolon => kind == TokenKind::Semicolon,
            Self::Arg => matches!(kind, TokenKind::Comma | TokenKind::CloseParen),
            Self::Element => matches!(kind, TokenKind::Comma | TokenKind::CloseSquare),
        }
    }
}

/// A value that can appear between operators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    Number(LitNum),
    Symbol(LitSym),
    Call(Call),
    Matrix(MatrixLit),
}

impl Operand {
    /// Returns the span of the operand.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Number(num) => num.span.clone(),
            Self::Symbol(sym) => sym.span.clone(),
            Self::Call(call) => call.span.clone(),
            Self::Matrix(matrix) => matrix.span.clone(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(num) => num.fmt(f),
            Self::Symbol(sym) => sym.fmt(f),
            Self::Call(call) => call.fmt(f),
            Self::Matrix(matrix) => matrix.fmt(f),
        }
    }
}

/// A single element of an expression fragment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Item {
    Operand(Operand),
    Binary(BinOp),
    Unary(UnaryOp),
    OpenParen(Range<usize>),
    CloseParen(Range<usize>),
}

impl Item {
    /// Returns the span of the item.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Operand(operand) => operand.span(),
            Self::Binary(op) => op.span.clone(),
            Self::Unary(op) => op.span.clone(),
            Self::OpenParen(span) | Self::CloseParen(span) => span.clone(),
        }
    }
}

/// An un-reduced infix expression, such as `2 * -(x + det(A))`.
///
/// The items are kept in source order. The evaluator converts them to postfix form before
/// reducing them to a single value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fragment {
    /// The operands, operators, and parentheses of the expression, in source order.
    pub items: Vec<Item>,

    /// The region of the source code that this fragment was parsed from.
    pub span: Range<usize>,
}

impl Fragment {
    /// Returns the span of the fragment.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the operand if the fragment consists of exactly one operand.
    pub fn as_single_operand(&self) -> Option<&Operand> {
        match &self.items[..] {
            [Item::Operand(operand)] => Some(operand),
            _ => None,
        }
    }

    /// Parses a fragment, stopping before the token that ends it. The terminating token is not
    /// consumed.
    ///
    /// Parentheses are tracked so that a `,` or `)` inside a group is not mistaken for the end of
    /// the fragment.
    pub fn parse_until(input: &mut Parser<'_>, terminator: Terminator) -> Result<Self, Error> {
        let mut items = Vec::new();
        let mut groups: Vec<Range<usize>> = Vec::new();
        let mut expect_operand = true;

        while let Some(token) = input.peek_token().cloned() {
            match token.kind {
                TokenKind::CloseParen if !groups.is_empty() => {
                    if matches!(items.last(), Some(Item::OpenParen(_))) {
                        return Err(Error::new(vec![token.span], EmptyExpression));
                    }
                    input.next_token()?;
                    groups.pop();
                    items.push(Item::CloseParen(token.span));
                    expect_operand = false;
                },
                TokenKind::Comma if !groups.is_empty() => {
                    let open = groups.last().cloned().unwrap_or_default();
                    return Err(Error::new(vec![open, token.span], CommaInGroup));
                },
                kind if terminator.ends_at(kind) || kind == TokenKind::Semicolon => {
                    if let Some(open) = groups.last() {
                        return Err(Error::new(vec![open.clone()], UnclosedParenthesis { opening: true }));
                    }
                    break;
                },
                // the row reports the missing `]`
                TokenKind::CloseParen if terminator == Terminator::Element => break,
                TokenKind::CloseParen => {
                    return Err(Error::new(vec![token.span], UnclosedParenthesis { opening: false }));
                },
                kind if kind.starts_operand() => {
                    if !expect_operand {
                        return Err(adjacent_operand(input, &token, terminator));
                    }

                    if kind == TokenKind::OpenParen {
                        input.next_token()?;
                        groups.push(token.span.clone());
                        items.push(Item::OpenParen(token.span));
                    } else {
                        items.push(Item::Operand(parse_operand(input, &token, terminator)?));
                        expect_operand = false;
                    }
                },
                TokenKind::Sub if expect_operand && input.peek_joined(TokenKind::Sub, TokenKind::Int) => {
                    items.push(Item::Operand(input.try_parse::<LitNum>().map(Operand::Number)?));
                    expect_operand = false;
                },
                TokenKind::Add | TokenKind::Sub if expect_operand => {
                    input.next_token()?;
                    let kind = if token.kind == TokenKind::Add {
                        UnaryOpKind::Pos
                    } else {
                        UnaryOpKind::Neg
                    };
                    items.push(Item::Unary(UnaryOp { kind, span: token.span }));
                },
                TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div => {
                    input.next_token()?;
                    let kind = match token.kind {
                        TokenKind::Add => BinOpKind::Add,
                        TokenKind::Sub => BinOpKind::Sub,
                        TokenKind::Mul => BinOpKind::Mul,
                        _ => BinOpKind::Div,
                    };
                    items.push(Item::Binary(BinOp { kind, span: token.span }));
                    expect_operand = true;
                },
                found => {
                    let expected = if expect_operand { OPERAND_START } else { AFTER_OPERAND };
                    return Err(Error::new(vec![token.span], UnexpectedToken { expected, found }));
                },
            }
        }

        if let Some(open) = groups.last() {
            return Err(Error::new(vec![open.clone()], UnclosedParenthesis { opening: true }));
        }

        match (items.first(), items.last()) {
            (Some(first), Some(last)) => {
                let span = first.span().start..last.span().end;
                Ok(Self { items, span })
            },
            _ => Err(input.error(EmptyExpression)),
        }
    }
}

/// Parses the operand starting at the given token: a literal, a symbol, a call, or a matrix.
fn parse_operand(
    input: &mut Parser<'_>,
    token: &Token<'_>,
    terminator: Terminator,
) -> Result<Operand, Error> {
    match token.kind {
        TokenKind::Int => input.try_parse::<LitNum>().map(Operand::Number),
        TokenKind::Name => {
            let name = input.try_parse::<LitSym>()?;
            if input.peek_kind() == Some(TokenKind::OpenParen) {
                Call::parse_with_name(input, name).map(Operand::Call)
            } else {
                Ok(Operand::Symbol(name))
            }
        },
        _ if terminator == Terminator::Element => {
            Err(Error::new(vec![token.span.clone()], NestedVector))
        },
        _ => input.try_parse::<MatrixLit>().map(Operand::Matrix),
    }
}

/// Builds the error for an operand that directly follows another operand.
///
/// In a declaration, this usually means the `;` was forgotten before the next statement.
fn adjacent_operand(input: &Parser<'_>, token: &Token<'_>, terminator: Terminator) -> Error {
    match terminator {
        Terminator::Semicolon => {
            let end = input.prev_token().map_or(token.span.start, |prev| prev.span.end);
            Error::new(vec![end..end], MissingSemicolon)
        },
        Terminator::Arg | Terminator::Element => {
            Error::new(vec![token.span.clone()], ExpectedOperator)
        },
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.items {
            match item {
                Item::Operand(operand) => operand.fmt(f)?,
                Item::Binary(op) => write!(f, " {} ", op)?,
                Item::Unary(op) => op.fmt(f)?,
                Item::OpenParen(_) => write!(f, "(")?,
                Item::CloseParen(_) => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
