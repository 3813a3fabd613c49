//! Builder method and type emission.
//!
//! Renders the descriptor arena as a module tree next to the builder
//! struct: one wrapper type per schema node with the full forwarded
//! constructor surface, and five construction methods per node on the
//! node's parent type. Nodes nested under a parent live in a submodule
//! named after the parent's stem, so equally named nodes under different
//! parents get distinct paths.

use convert_case::{Case, Casing as _};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, ItemStruct};

use super::synth::{TypeArena, TypeDescriptor};
use super::util::ident_for_stem;
use crate::config::MacroConfig;

/// The constructor surface every generated type forwards from the node
/// runtime. Emitted from this one table so forwarding is total.
enum ForwardedCtor {
    New,
    WithAttributes,
    WithAttributesAndText,
    WithText,
}

const FORWARDED_CTORS: [ForwardedCtor; 4] = [
    ForwardedCtor::New,
    ForwardedCtor::WithAttributes,
    ForwardedCtor::WithAttributesAndText,
    ForwardedCtor::WithText,
];

pub fn expand_builder(
    config: &MacroConfig,
    item: &ItemStruct,
    arena: &TypeArena,
    roots: &[usize],
) -> TokenStream {
    if roots.is_empty() {
        return TokenStream::new();
    }
    let builder_ident = &item.ident;
    let vis = &item.vis;
    let krate = &config.tree_crate;
    let module_ident = Ident::new(
        &builder_ident.to_string().to_case(Case::Snake),
        builder_ident.span(),
    );

    let items = roots.iter().map(|&index| node_items(arena, index, krate));
    let methods = roots.iter().map(|&index| {
        let desc = arena.get(index);
        let type_ident = &desc.type_ident;
        construction_methods(desc, quote!(None), quote!(#module_ident::#type_ident), krate)
    });

    quote! {
        #[allow(non_camel_case_types)]
        #vis mod #module_ident {
            #(#items)*
        }
        impl #builder_ident {
            #(#methods)*
        }
    }
}

/// Emits one node's wrapper type, its forwarded constructors, its child
/// construction methods, and the submodule holding its children.
fn node_items(arena: &TypeArena, index: usize, krate: &TokenStream) -> TokenStream {
    let desc = arena.get(index);
    let type_ident = &desc.type_ident;
    let ctors = FORWARDED_CTORS
        .iter()
        .map(|kind| forwarding_constructor(kind, krate));

    let mut items = quote! {
        #[derive(Clone, Debug, PartialEq)]
        pub struct #type_ident {
            node: #krate::Node,
        }
        impl #type_ident {
            #(#ctors)*
        }
        impl ::core::ops::Deref for #type_ident {
            type Target = #krate::Node;
            fn deref(&self) -> &#krate::Node {
                &self.node
            }
        }
        impl #krate::TreeNode for #type_ident {
            fn node(&self) -> &#krate::Node {
                &self.node
            }
            fn into_node(self) -> #krate::Node {
                self.node
            }
        }
    };

    if desc.children.is_empty() {
        return items;
    }

    let module_ident = &desc.stem_ident;
    let methods = desc.children.iter().map(|&child| {
        let child_desc = arena.get(child);
        let child_type = &child_desc.type_ident;
        construction_methods(
            child_desc,
            quote!(Some(&self.node)),
            quote!(#module_ident::#child_type),
            krate,
        )
    });
    let child_items = desc
        .children
        .iter()
        .map(|&child| node_items(arena, child, krate));

    items.extend(quote! {
        impl #type_ident {
            #(#methods)*
        }
        pub mod #module_ident {
            #(#child_items)*
        }
    });
    items
}

/// The five construction methods a parent type gets for one child node.
/// Generated as one unit: either all five exist or the node was dropped.
fn construction_methods(
    desc: &TypeDescriptor,
    parent_ref: TokenStream,
    child_type: TokenStream,
    krate: &TokenStream,
) -> TokenStream {
    let name = &desc.stem;
    let span = desc.stem_ident.span();
    let base = &desc.stem_ident;
    let attrs = ident_for_stem(&format!("{name}_attrs"), span);
    let attrs_text = ident_for_stem(&format!("{name}_attrs_text"), span);
    let text = ident_for_stem(&format!("{name}_text"), span);
    let empty = ident_for_stem(&format!("{name}_empty"), span);

    quote! {
        pub fn #base(&self, children: impl FnOnce(&#child_type)) -> #child_type {
            let node = #child_type::new(#parent_ref, #name);
            children(&node);
            node
        }
        pub fn #attrs(
            &self,
            attributes: #krate::Attributes,
            children: impl FnOnce(&#child_type),
        ) -> #child_type {
            let node = #child_type::with_attributes(#parent_ref, #name, attributes);
            children(&node);
            node
        }
        pub fn #attrs_text(
            &self,
            attributes: #krate::Attributes,
            text: impl Into<#krate::Text>,
        ) -> #child_type {
            #child_type::with_attributes_and_text(#parent_ref, #name, attributes, text)
        }
        pub fn #text(&self, text: impl Into<#krate::Text>) -> #child_type {
            #child_type::with_text(#parent_ref, #name, text)
        }
        pub fn #empty(&self) -> #child_type {
            #child_type::new(#parent_ref, #name)
        }
    }
}

fn forwarding_constructor(kind: &ForwardedCtor, krate: &TokenStream) -> TokenStream {
    match kind {
        ForwardedCtor::New => quote! {
            pub fn new(parent: Option<&#krate::Node>, name: impl Into<String>) -> Self {
                Self { node: #krate::Node::new(parent, name) }
            }
        },
        ForwardedCtor::WithAttributes => quote! {
            pub fn with_attributes(
                parent: Option<&#krate::Node>,
                name: impl Into<String>,
                attributes: #krate::Attributes,
            ) -> Self {
                Self { node: #krate::Node::with_attributes(parent, name, attributes) }
            }
        },
        ForwardedCtor::WithAttributesAndText => quote! {
            pub fn with_attributes_and_text(
                parent: Option<&#krate::Node>,
                name: impl Into<String>,
                attributes: #krate::Attributes,
                text: impl Into<#krate::Text>,
            ) -> Self {
                Self { node: #krate::Node::with_attributes_and_text(parent, name, attributes, text) }
            }
        },
        ForwardedCtor::WithText => quote! {
            pub fn with_text(
                parent: Option<&#krate::Node>,
                name: impl Into<String>,
                text: impl Into<#krate::Text>,
            ) -> Self {
                Self { node: #krate::Node::with_text(parent, name, text) }
            }
        },
    }
}
