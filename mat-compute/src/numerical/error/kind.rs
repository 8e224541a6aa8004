use ariadne::Fmt;
use mat_attrs::ErrorKind;
use mat_error::EXPR;

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Name,
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = format!(
        "to define it, type: {} {} = {};",
        "let".fg(EXPR),
        name.fg(EXPR),
        "<expression>".fg(EXPR),
    ),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Name,
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        format!(
            "the available functions are {}, {}, and the reductions {}",
            "print".fg(EXPR),
            "transpose".fg(EXPR),
            "rref to_diag to_triangle inv det rank".fg(EXPR),
        )
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A declaration tried to use the name of a builtin.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Name,
    message = format!("cannot declare a variable named `{}`", name),
    labels = ["this name belongs to a builtin function"],
    help = "choose a different name",
)]
pub struct ReservedName {
    /// The name that was declared.
    pub name: String,
}

/// Too many arguments were given to a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("too many arguments were given to the `{}` function", name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        name.fg(EXPR),
        expected,
        given
    ),
)]
pub struct TooManyArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument to a function call is missing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument #{} for the `{}` function", index + 1, name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        name.fg(EXPR),
        expected,
        given
    ),
)]
pub struct MissingArgument {
    /// The name of the function that was called.
    pub name: String,

    /// The index of the missing argument.
    pub index: usize,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument to a function call has the wrong type.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("incorrect type for argument #{} for the `{}` function", index + 1, name),
    labels = [
        "this function call".to_string(),
        format!("this argument has type `{}`", given),
    ],
    help = format!("should be of type `{}`", expected),
)]
pub struct TypeMismatch {
    /// The name of the function that was called.
    pub name: String,

    /// The index of the argument that was mismatched.
    pub index: usize,

    /// The type of the argument that was expected.
    pub expected: &'static str,

    /// The type of the argument that was given.
    pub given: &'static str,
}

/// The given binary operation cannot be applied to the given operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to these operands", op),
    labels = [
        format!("this operand has type `{}`", left),
        "this operator".to_string(),
        format!("this operand has type `{}`", right),
    ],
)]
pub struct InvalidBinaryOperation {
    /// The symbol of the operator that was used.
    pub op: &'static str,

    /// The type the left side evaluated to.
    pub left: &'static str,

    /// The type the right side evaluated to.
    pub right: &'static str,
}

/// The given unary operation cannot be applied to the given operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to this operand", op),
    labels = [
        "this operator".to_string(),
        format!("this operand has type `{}`", operand),
    ],
)]
pub struct InvalidUnaryOperation {
    /// The symbol of the operator that was used.
    pub op: &'static str,

    /// The type the operand evaluated to.
    pub operand: &'static str,
}

/// The operators and operands of an expression could not be reduced to a single value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed expression",
    labels = ["this expression"],
)]
pub struct MalformedExpression;

/// A matrix element did not evaluate to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "matrix elements must be numbers",
    labels = [format!("this element has type `{}`", given)],
    help = "matrices cannot contain other matrices, symbols, or `()`",
)]
pub struct NonScalarElement {
    /// The type the element evaluated to.
    pub given: &'static str,
}

/// A matrix literal has no rows or no columns.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "empty matrix",
    labels = ["this matrix"],
    help = "a matrix must have at least one row and one column",
)]
pub struct EmptyMatrix;

/// The rows of a matrix literal have different lengths.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "the rows of a matrix must all have the same length",
    labels = [
        format!("this row has {} element(s)", expected),
        format!("but this row has {} element(s)", found),
    ],
)]
pub struct RaggedMatrix {
    /// The length of the first row.
    pub expected: usize,

    /// The length of the offending row.
    pub found: usize,
}

/// An arithmetic result does not fit in 64 bits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "arithmetic overflow",
    labels = ["while evaluating this"],
    note = "numerators and denominators are limited to 64 bits",
)]
pub struct Overflow;

/// Division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["while evaluating this"],
)]
pub struct DivisionByZero;

/// The shapes of two matrices are incompatible with an operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("mismatched matrix shapes for the `{}` operator", op),
    labels = [
        format!("this matrix is {}x{}", left.0, left.1),
        "this operator".to_string(),
        format!("this matrix is {}x{}", right.0, right.1),
    ],
    help = if *op == "*" {
        "the left matrix must have as many columns as the right matrix has rows"
    } else {
        "both matrices must have the same number of rows and columns"
    },
)]
pub struct ShapeMismatch {
    /// The symbol of the operator that was used.
    pub op: &'static str,

    /// The shape of the left matrix, as `(rows, columns)`.
    pub left: (usize, usize),

    /// The shape of the right matrix, as `(rows, columns)`.
    pub right: (usize, usize),
}

/// A function that requires a square matrix was given a non-square one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function requires a square matrix", name),
    labels = [
        "this function call".to_string(),
        format!("this matrix is {}x{}", rows, cols),
    ],
)]
pub struct NotSquare {
    /// The name of the function that was called.
    pub name: String,

    /// The number of rows of the argument.
    pub rows: usize,

    /// The number of columns of the argument.
    pub cols: usize,
}

/// `inv` was given a matrix with no inverse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "singular matrix",
    labels = ["this function call", "this matrix has no inverse"],
    help = format!("check the matrix with {} first; it must equal the number of rows", "rank".fg(EXPR)),
)]
pub struct SingularMatrix;

/// Writing to the output failed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("could not write output: {}", reason),
    labels = ["this function call"],
)]
pub struct OutputFailed {
    /// The underlying I/O error, as text.
    pub reason: String,
}
