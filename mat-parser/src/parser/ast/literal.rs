use crate::{
    parser::{
        error::{Error, IntegerOverflow, NumberBeforeName},
        token::{Int, Name},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal.
///
/// A `-` written directly before the digits is part of the literal, so that `-9223372036854775808`
/// is a valid literal. A sign separated from the digits by whitespace, or written before anything
/// else, is a unary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: i64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitNum {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let sign = input.next_if_joined(TokenKind::Sub, TokenKind::Int);
        let int = input.try_parse::<Int>()?;

        if let Some(next) = input.current_token() {
            if next.kind == TokenKind::Name {
                return Err(Error::new(vec![int.span, next.span.clone()], NumberBeforeName));
            }
        }

        let (digits, span) = match sign {
            Some(sign) => (format!("-{}", int.lexeme), sign.span.start..int.span.end),
            None => (int.lexeme.to_owned(), int.span),
        };
        let value = digits
            .parse::<i64>()
            .map_err(|_| Error::new(vec![span.clone()], IntegerOverflow))?;

        Ok(Self { value, span })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables and functions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitSym {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        input
            .try_parse::<Name>()
            .map(|name| Self {
                name: name.lexeme.to_owned(),
                span: name.span,
            })
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
