use crate::{
    parser::{
        ast::{expr::{Fragment, Terminator}, literal::LitSym},
        error::{Error, UnclosedParenthesis},
        token::OpenParen,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `rank(A)` or `print(x, -40)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Fragment>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a set of two spans, where the first is the span of the function name (with the
    /// opening parenthesis) and the second is the span of the closing parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end - 1..self.paren_span.end,
        ]
    }

    /// Parses the parenthesized argument list of a call whose name has already been parsed.
    pub fn parse_with_name(input: &mut Parser<'_>, name: LitSym) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;
        let mut args = Vec::new();

        let close = match input.next_if(TokenKind::CloseParen) {
            Some(close) => close,
            None => loop {
                args.push(Fragment::parse_until(input, Terminator::Arg)?);

                if input.next_if(TokenKind::Comma).is_some() {
                    continue;
                }

                match input.next_if(TokenKind::CloseParen) {
                    Some(close) => break close,
                    None => return Err(Error::new(
                        vec![open.span.clone()],
                        UnclosedParenthesis { opening: true },
                    )),
                }
            },
        };

        let span = name.span.start..close.span.end;
        Ok(Self {
            name,
            args,
            span,
            paren_span: open.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)?;
        write!(f, "(")?;
        if let Some((last, args)) = self.args.split_last() {
            for arg in args {
                arg.fmt(f)?;
                write!(f, ", ")?;
            }
            last.fmt(f)?;
        }
        write!(f, ")")
    }
}
