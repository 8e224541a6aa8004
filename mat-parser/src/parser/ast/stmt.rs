use crate::{
    parser::{
        ast::{call::Call, expr::{Fragment, Terminator}, literal::LitSym},
        error::{
            Error,
            ExpectedCall,
            ExpectedVariableName,
            InvalidStatement,
            MissingAssign,
            MissingSemicolon,
        },
        token::{Assign, Let as LetKeyword, Semicolon},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Consumes the `;` that terminates a statement, reporting a [`MissingSemicolon`] error directly
/// after the last consumed token if it is absent.
fn parse_semicolon(input: &mut Parser<'_>) -> Result<Range<usize>, Error> {
    input
        .try_parse::<Semicolon>()
        .map(|semicolon| semicolon.span)
        .map_err(|_| {
            let end = input.prev_token().map_or(0, |token| token.span.end);
            Error::new(vec![end..end], MissingSemicolon)
        })
}

/// A variable declaration, such as `let A = [[1, 2], [3, 4]];`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Let {
    /// The name of the variable being declared.
    pub name: LitSym,

    /// The expression whose value is bound to the name.
    pub value: Fragment,

    /// The region of the source code that this declaration was parsed from, including the
    /// terminating semicolon.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for Let {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let keyword = input.try_parse::<LetKeyword>()?;
        let name = input
            .try_parse::<LitSym>()
            .map_err(|_| input.error(ExpectedVariableName))?;
        input
            .try_parse::<Assign>()
            .map_err(|_| input.error(MissingAssign))?;
        let value = Fragment::parse_until(input, Terminator::Semicolon)?;
        let semicolon = parse_semicolon(input)?;

        Ok(Self {
            name,
            value,
            span: keyword.span.start..semicolon.end,
        })
    }
}

impl fmt::Display for Let {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

/// Represents a statement in MatLang: either a declaration or a call to a function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stmt {
    Let(Let),
    Call(Call),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn span(&self) -> Range<usize> {
        match self {
            Stmt::Let(decl) => decl.span.clone(),
            Stmt::Call(call) => call.span(),
        }
    }
}

impl<'source> Parse<'source> for Stmt {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        match input.peek_kind() {
            Some(TokenKind::Let) => input.try_parse::<Let>().map(Stmt::Let),
            Some(TokenKind::Name) => {
                let name = input.try_parse::<LitSym>()?;
                if input.peek_kind() != Some(TokenKind::OpenParen) {
                    return Err(Error::new(vec![name.span.clone()], ExpectedCall { name: name.name }));
                }

                let call = Call::parse_with_name(input, name)?;
                parse_semicolon(input)?;
                Ok(Stmt::Call(call))
            },
            _ => Err(input.error(InvalidStatement)),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stmt::Let(decl) => decl.fmt(f),
            Stmt::Call(call) => write!(f, "{};", call),
        }
    }
}
