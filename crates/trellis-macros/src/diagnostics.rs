use proc_macro2::{Span, TokenStream};

/// Accumulates located, non-fatal errors across the whole expansion.
///
/// Every error is rendered as a `compile_error!` alongside whatever was
/// successfully generated, so one malformed schema branch never hides
/// the diagnostics (or the generated code) of its siblings.
#[derive(Default)]
pub struct Diagnostics {
    errors: Vec<syn::Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, span: Span, message: impl std::fmt::Display) {
        self.errors.push(syn::Error::new(span, message));
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn to_compile_errors(&self) -> TokenStream {
        self.errors.iter().map(syn::Error::to_compile_error).collect()
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}
