use mat_attrs::ErrorKind;
use mat_error::{Category, Error};

#[derive(Debug, ErrorKind)]
#[error(
    category = Name,
    message = format!("undefined variable `{}`", name),
    labels = ["this variable"],
    help = "declare it first with `let`",
)]
struct UndefinedVariable {
    name: String,
}

#[derive(Debug, ErrorKind)]
#[error(message = "the matrix is singular")]
struct Singular;

#[derive(Debug, ErrorKind)]
#[error(
    category = Syntax,
    message = "expected `;`",
    labels = ["statement starts here", "add `;` here"],
)]
struct MissingSemicolon;

fn render(error: &Error, input: &str) -> String {
    let report = error.report_to_string("input", input).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
}

#[test]
fn category_and_message() {
    let error = Error::new(vec![4..5], UndefinedVariable { name: "x".to_string() });
    assert_eq!(error.category(), Category::Name);
    assert_eq!(error.message(), "undefined variable `x`");
    assert_eq!(error.to_string(), "NameError: undefined variable `x`");
}

#[test]
fn default_category_is_runtime() {
    let error = Error::new(vec![0..3], Singular);
    assert_eq!(error.category(), Category::Runtime);
    assert_eq!(error.to_string(), "RuntimeError: the matrix is singular");
}

#[test]
fn report_contains_labels_and_help() {
    let input = "print(x);";
    let error = Error::new(vec![6..7], UndefinedVariable { name: "x".to_string() });
    let text = render(&error, input);
    assert!(text.contains("NameError"));
    assert!(text.contains("undefined variable `x`"));
    assert!(text.contains("this variable"));
    assert!(text.contains("declare it first with `let`"));
}

#[test]
fn extra_labels_without_spans_are_dropped() {
    let input = "let x = 1";
    let error = Error::new(vec![0..3], MissingSemicolon);
    let text = render(&error, input);
    assert!(text.contains("SyntaxError"));
    assert!(text.contains("statement starts here"));
    assert!(!text.contains("add `;` here"));
}
