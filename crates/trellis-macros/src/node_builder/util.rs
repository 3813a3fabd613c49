use proc_macro2::Span;
use syn::Ident;

/// Upper-cases exactly the first character, preserving the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Makes an identifier from a stem, falling back to a raw identifier when
/// the stem is a keyword (e.g. a node named `type`).
pub fn ident_for_stem(stem: &str, span: Span) -> Ident {
    match syn::parse_str::<Ident>(stem) {
        Ok(mut ident) => {
            ident.set_span(span);
            ident
        }
        Err(_) => Ident::new_raw(stem, span),
    }
}
