//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries an error kind along with the regions of source
//! code it points at.
//!
//! Every error belongs to one of three [`Category`]s. Evaluation is fail-fast: the first error
//! aborts the script, and the caller decides what to do with it.

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad category an error falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A malformed token sequence, such as a missing semicolon, an invalid statement beginning,
    /// or a ragged matrix literal.
    Syntax,

    /// An unresolved symbol, an unknown function, or a declaration that collides with a builtin.
    Name,

    /// A wrong argument count or type, a shape mismatch, a singular matrix given to `inv`, or an
    /// arithmetic failure such as division by zero.
    Runtime,
}

impl Category {
    /// Returns the name of the category, as shown at the top of a report.
    pub fn name(self) -> &'static str {
        match self {
            Category::Syntax => "SyntaxError",
            Category::Name => "NameError",
            Category::Runtime => "RuntimeError",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `mat_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// The category of this error.
    fn category(&self) -> Category;

    /// The message displayed at the top of the report.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the category of this error.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns the message of this error, without any source annotations.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, annotating the given source code.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report for this error into a string. The string includes ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.message())
    }
}

impl std::error::Error for Error {}
