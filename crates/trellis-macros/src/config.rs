use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Arguments of the `#[node_builder(...)]` attribute itself.
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct NodeBuilderArgs {
    #[darling(rename = "crate")]
    pub crate_path: Option<Path>,
}

pub struct MacroConfig {
    /// Path of the tree runtime referenced by generated code.
    pub tree_crate: TokenStream,
}

impl MacroConfig {
    pub fn from_args(args: NodeBuilderArgs) -> Self {
        use quote::ToTokens;
        let tree_crate = args
            .crate_path
            .map(|path| path.into_token_stream())
            .unwrap_or_else(|| quote! { ::trellis::tree });
        Self { tree_crate }
    }

    pub fn parse(args: TokenStream) -> Result<Self, darling::Error> {
        let metas = NestedMeta::parse_meta_list(args)?;
        Ok(Self::from_args(NodeBuilderArgs::from_list(&metas)?))
    }
}
