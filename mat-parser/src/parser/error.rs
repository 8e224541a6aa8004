//! Error kinds raised while parsing. Every parsing error is a [`Category::Syntax`] error.
//!
//! [`Category::Syntax`]: mat_error::Category::Syntax

use ariadne::Fmt;
use mat_attrs::ErrorKind;
use mat_error::EXPR;
use crate::tokenizer::TokenKind;

pub use mat_error::Error;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A statement started with something other than `let` or a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "invalid statement",
    labels = ["a statement cannot start here"],
    help = format!("statements are either declarations like {} or calls like {}", "`let x = 1;`".fg(EXPR), "`print(x);`".fg(EXPR)),
)]
pub struct InvalidStatement;

/// A name was used as a statement without calling it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = format!("expected a call to `{}`", name),
    labels = ["this name is not followed by `(`"],
    help = "only function calls and `let` declarations can be used as statements",
)]
pub struct ExpectedCall {
    /// The name that was found.
    pub name: String,
}

/// A statement was not terminated with a semicolon.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "missing semicolon",
    labels = ["add a `;` here"],
    help = "every statement must end with `;`",
)]
pub struct MissingSemicolon;

/// The name in a `let` declaration is missing or is not an identifier.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "expected a variable name",
    labels = ["I expected to see a name here"],
    help = format!("names start with a letter or underscore, as in {}", "`let A = [[1]];`".fg(EXPR)),
)]
pub struct ExpectedVariableName;

/// The `=` in a `let` declaration is missing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "missing `=` in declaration",
    labels = ["I expected to see `=` here"],
)]
pub struct MissingAssign;

/// An expression was expected, but there was nothing there.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "expected an expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// Two operands appeared next to each other without an operator in between.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "expected an operator",
    labels = ["this operand follows another operand"],
    help = format!("use {} to multiply values", "`*`".fg(EXPR)),
)]
pub struct ExpectedOperator;

/// A parenthesis was not closed, or was closed without being opened.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A comma appeared inside a parenthesized group.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "unexpected comma inside parentheses",
    labels = ["(1) this group...", "(2) ...cannot contain a comma"],
    help = "close the group before separating arguments or elements",
)]
pub struct CommaInGroup;

/// A vector or matrix literal was written as an element of a matrix row.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "nested vectors are not allowed",
    labels = ["this bracket opens a vector inside a matrix row"],
    help = "matrix elements must be scalars",
)]
pub struct NestedVector;

/// A matrix row was not written as a bracketed list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "expected a matrix row",
    labels = ["I expected to see `[` here"],
    help = format!("matrices are written as lists of rows, as in {}", "`[[1, 2], [3, 4]]`".fg(EXPR)),
)]
pub struct ExpectedRow;

/// A matrix literal, or one of its rows, was not closed with `]`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "unclosed bracket",
    labels = ["this bracket is not closed", "I expected to see `]` here"],
    help = format!("close the list with {}", "`]`".fg(EXPR)),
)]
pub struct UnclosedBracket;

/// An integer literal does not fit in a 64-bit signed integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "integer literal is too large",
    labels = ["this literal"],
    help = format!(
        "integers must be between {} and {}",
        i64::MIN.fg(EXPR),
        i64::MAX.fg(EXPR),
    ),
)]
pub struct IntegerOverflow;

/// An integer literal is immediately followed by a name, as in `213x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "invalid name",
    labels = ["(1) this number...", "(2) ...runs into this name"],
    help = "names cannot start with a digit; use `*` to multiply",
)]
pub struct NumberBeforeName;
