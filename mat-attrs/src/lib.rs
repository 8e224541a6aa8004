mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use mat_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     category = Syntax,
///     message = "unexpected end of file",
///     labels = ["add something here"],
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag        | Description                                                                   |
/// | ---------- | ----------------------------------------------------------------------------- |
/// | `category` | One of `Syntax`, `Name`, or `Runtime`. Defaults to `Runtime`.                 |
/// | `message`  | The message displayed at the top of the error when it is displayed.           |
/// | `labels`   | An array of label texts. The `n`th label points at the `n`th span of the error. |
/// | `help`     | Optional help text for the error, describing what the user can do to fix it.  |
/// | `note`     | Optional note attached to the bottom of the error.                            |
///
/// Each tag except `category` accepts an expression that should evaluate to something that
/// implements [`ToString`]. For structs with named fields, the expression is evaluated with the
/// members of the struct in scope (as well as `self`), so they can be used in the expression.
/// Tuple structs are not supported.
///
/// The generated implementation refers to the `ariadne` and `mat_error` crates by name, so both
/// must be dependencies of the crate using the derive.
///
/// [`ErrorKind`]: https://docs.rs/mat-error/latest/mat_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl mat_error::ErrorKind for #name {
            #target
        }
    }.into()
}
