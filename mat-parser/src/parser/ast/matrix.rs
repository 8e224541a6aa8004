use crate::{
    parser::{
        ast::expr::{Fragment, Terminator},
        error::{Error, ExpectedRow, UnclosedBracket},
        token::{CloseSquare, OpenSquare},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parses a bracketed, comma-separated list, calling `item` for each element. An empty list
/// (`[]`) is accepted. Returns the elements and the span from `[` to `]`.
///
/// If the list does not end with `]`, the error points at both the opening bracket and the token
/// found instead.
fn parse_bracketed<'source, T>(
    input: &mut Parser<'source>,
    mut item: impl FnMut(&mut Parser<'source>) -> Result<T, Error>,
) -> Result<(Vec<T>, Range<usize>), Error> {
    let open = input.try_parse::<OpenSquare>()?;
    let mut values = Vec::new();

    if let Some(close) = input.next_if(TokenKind::CloseSquare) {
        return Ok((values, open.span.start..close.span.end));
    }

    loop {
        values.push(item(input)?);
        if input.next_if(TokenKind::Comma).is_none() {
            break;
        }
    }

    let close = input
        .try_parse::<CloseSquare>()
        .map_err(|_| Error::new(vec![open.span.clone(), input.span()], UnclosedBracket))?;
    Ok((values, open.span.start..close.span.end))
}

/// One row of a matrix literal, such as `[1, 2 * x, det(B)]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    /// The elements of the row, each an expression.
    pub elements: Vec<Fragment>,

    /// The region of the source code that this row was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for Row {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        if input.peek_kind() != Some(TokenKind::OpenSquare) {
            return Err(input.error(ExpectedRow));
        }

        let (elements, span) = parse_bracketed(input, |input| {
            Fragment::parse_until(input, Terminator::Element)
        })?;
        Ok(Self { elements, span })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        if let Some((last, elements)) = self.elements.split_last() {
            for element in elements {
                write!(f, "{}, ", element)?;
            }
            last.fmt(f)?;
        }
        write!(f, "]")
    }
}

/// A matrix literal, such as `[[1, 2], [3, 4]]`.
///
/// The rows are not checked to have equal lengths here; that is done when the matrix value is
/// built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixLit {
    /// The rows of the matrix.
    pub rows: Vec<Row>,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for MatrixLit {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let (rows, span) = parse_bracketed(input, |input| input.try_parse::<Row>())?;
        Ok(Self { rows, span })
    }
}

impl fmt::Display for MatrixLit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        if let Some((last, rows)) = self.rows.split_last() {
            for row in rows {
                write!(f, "{}, ", row)?;
            }
            last.fmt(f)?;
        }
        write!(f, "]")
    }
}
