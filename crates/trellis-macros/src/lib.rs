use proc_macro2::Span;

pub(crate) mod config;
pub(crate) mod diagnostics;
mod node_builder;

/// Generates a schema-constrained node-tree builder from a struct.
///
/// The struct's `schema` field describes, as a nested block, which node
/// kinds may appear beneath which. The macro removes that field and emits
/// one wrapper type per schema node plus five construction methods per node
/// on the enclosing type, so a document tree can only be built in shapes the
/// schema allows:
///
/// ```ignore
/// use trellis::{node_builder, schema};
///
/// #[node_builder]
/// struct Html {
///     schema: schema! {
///         html {
///             body {
///                 a()
///                 p()
///             }
///         }
///     },
/// }
///
/// let builder = Html {};
/// let html = builder.html(|html| {
///     html.body(|body| {
///         body.p_text("This is some text in the paragraph");
///         body.a_attrs_text(attrs! { "href" => "http://www.link.com" }, "LINK");
///     });
/// });
/// ```
///
/// The tree runtime used by the generated code defaults to `::trellis::tree`
/// and can be overridden with `#[node_builder(crate = path)]`.
#[proc_macro_attribute]
pub fn node_builder(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    node_builder::expand(args.into(), input.into()).into()
}

/// Marks the schema block of a [`macro@node_builder`] struct.
///
/// `#[node_builder]` consumes the `schema` field before this macro would
/// expand, so an expansion only ever happens on misuse.
#[proc_macro]
pub fn schema(_input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    syn::Error::new(
        Span::call_site(),
        "`schema!` is only recognized as the type of the `schema` field \
         of a struct annotated with `#[node_builder]`",
    )
    .to_compile_error()
    .into()
}
