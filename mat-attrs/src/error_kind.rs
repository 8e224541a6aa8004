use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub category: Option<Ident>,
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub note: Option<Expr>,
}

impl ErrorArgs {
    /// Parse the next argument in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let ident_str = ident.to_string();
        match ident_str.as_str() {
            "category" => {
                let category: Ident = input.parse()?;
                match category.to_string().as_str() {
                    "Syntax" | "Name" | "Runtime" => self.category = Some(category),
                    other => return Err(syn::Error::new_spanned(
                        &category,
                        format!("unknown category `{}`; expected `Syntax`, `Name`, or `Runtime`", other),
                    )),
                }
            },
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            "note" => self.note = Some(input.parse()?),
            _ => return Err(syn::Error::new_spanned(ident, format!("unknown tag `{}`", ident_str))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Creates a `let` expression that destructures `self` into its named fields. Returns a compile
/// error if the fields are not named.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! {
                #[allow(unused_variables)]
                let #ident { #(#fields),* } = self;
            }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let mut error_args = ErrorArgs::default();

        for attr in item.attrs.iter().filter(|attr| attr.path().is_ident("error")) {
            error_args = attr.parse_args::<ErrorArgs>()?;
        }

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "missing `#[error(message = ...)]` attribute",
            ));
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let category = self.error_args.category
            .as_ref()
            .map(|ident| quote! { mat_error::Category::#ident })
            .unwrap_or_else(|| quote! { mat_error::Category::Runtime });
        let message = self.error_args.message.as_ref();
        let labels = self.error_args.labels
            .as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { ::std::vec::Vec::<&str>::new() });
        let help = self.error_args.help.as_ref().map(|e| quote! { builder.set_help(#e); });
        let note = self.error_args.note.as_ref().map(|e| quote! { builder.set_note(#e); });

        tokens.extend(quote! {
            fn category(&self) -> mat_error::Category {
                #category
            }

            fn message(&self) -> ::std::string::String {
                #destructure_expr
                ::std::string::ToString::to_string(&(#message))
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #destructure_expr

                let category = mat_error::ErrorKind::category(self);
                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(
                    ariadne::ReportKind::Custom(category.name(), ariadne::Color::Red),
                    src_id,
                    offset,
                )
                    .with_message(mat_error::ErrorKind::message(self))
                    .with_labels(
                        #labels
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(label_str, span)| {
                                let mut label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(mat_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<::std::vec::Vec<_>>()
                    );

                #help
                #note
                builder.finish()
            }
        });
    }
}
