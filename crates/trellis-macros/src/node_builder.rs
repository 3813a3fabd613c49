//! `#[node_builder]` attribute implementation.
//!
//! The expansion runs in three passes over the schema: parse the nested
//! block into a forest of schema nodes, synthesize one type descriptor per
//! node into an arena, then emit the module tree, the forwarding
//! constructors, and the construction-method sets. The `schema` field never
//! reaches the emitted struct.

mod emit;
mod parse;
mod synth;
mod util;


use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{Fields, Item, ItemStruct, Type};

use crate::config::MacroConfig;
use crate::diagnostics::Diagnostics;

const SCHEMA_FIELD_NAME: &str = "schema";

pub fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    let config = match MacroConfig::parse(args) {
        Ok(config) => config,
        Err(error) => {
            let errors = error.write_errors();
            return quote! { #errors #input };
        }
    };

    let item: Item = match syn::parse2(input.clone()) {
        Ok(item) => item,
        Err(error) => {
            let error = error.to_compile_error();
            return quote! { #error #input };
        }
    };

    let mut diagnostics = Diagnostics::new();
    let expanded = match item {
        Item::Struct(item) => expand_struct(&config, item, &mut diagnostics),
        other => {
            diagnostics.report(
                other.span(),
                "#[node_builder] can only be applied to a struct",
            );
            other.into_token_stream()
        }
    };
    let errors = diagnostics.to_compile_errors();
    quote! {
        #expanded
        #errors
    }
}

fn expand_struct(
    config: &MacroConfig,
    mut item: ItemStruct,
    diagnostics: &mut Diagnostics,
) -> TokenStream {
    if !item.generics.params.is_empty() {
        diagnostics.report(
            item.generics.span(),
            "#[node_builder] does not support generic structs",
        );
        return item.into_token_stream();
    }

    let Fields::Named(fields) = &item.fields else {
        // Tuple and unit structs cannot carry a schema field.
        return item.into_token_stream();
    };
    let Some(position) = fields
        .named
        .iter()
        .position(|field| field.ident.as_ref().is_some_and(|i| i == SCHEMA_FIELD_NAME))
    else {
        // No schema: the pass is a no-op for this type.
        return item.into_token_stream();
    };

    let Some(schema) = schema_tokens(&fields.named[position].ty) else {
        diagnostics.report(
            fields.named[position].ty.span(),
            "the `schema` field's type must be a `schema! { ... }` block",
        );
        return item.into_token_stream();
    };

    // Scrub the schema before emitting anything: it is generation input
    // only and must not survive into the struct.
    if let Fields::Named(fields) = &mut item.fields {
        fields.named = fields
            .named
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, field)| field.clone())
            .collect();
    }

    let forest = parse::parse_block(schema, diagnostics);
    let (arena, roots) = synth::synthesize(&forest, diagnostics);
    let generated = emit::expand_builder(config, &item, &arena, &roots);
    quote! {
        #item
        #generated
    }
}

fn schema_tokens(ty: &Type) -> Option<TokenStream> {
    let Type::Macro(mac) = ty else {
        return None;
    };
    let segment = mac.mac.path.segments.last()?;
    (segment.ident == SCHEMA_FIELD_NAME).then(|| mac.mac.tokens.clone())
}
