//! Node type synthesizer.
//!
//! Walks the parsed forest and registers one type descriptor per schema
//! node in an arena, validating names as it goes. Descriptors are pushed
//! before their children are walked, so a node is registered even when a
//! child branch later fails.

use indexmap::IndexSet;
use syn::Ident;

use super::parse::SchemaNode;
use super::util::{capitalize, ident_for_stem};
use crate::diagnostics::Diagnostics;

/// Stems that would collide with methods every generated type already
/// carries: the forwarding constructors and the `TreeNode` accessors.
const RESERVED_STEMS: [&str; 6] = [
    "new",
    "with_attributes",
    "with_attributes_and_text",
    "with_text",
    "node",
    "into_node",
];

/// Stems that cannot be made into identifiers, raw or not. Checked against
/// the lower-cased name, so `Self` and `SELF` are caught as well.
const UNUSABLE_STEMS: [&str; 4] = ["self", "super", "crate", "_"];

pub struct TypeArena {
    types: Vec<TypeDescriptor>,
}

pub struct TypeDescriptor {
    /// Lower-cased node name: the method-name stem and the runtime node name.
    pub stem: String,
    /// `Capitalize(name)`, the generated wrapper type.
    pub type_ident: Ident,
    /// The stem as a (possibly raw) identifier, used for the child module
    /// and the base construction method.
    pub stem_ident: Ident,
    pub children: Vec<usize>,
}

impl TypeArena {
    pub fn get(&self, index: usize) -> &TypeDescriptor {
        &self.types[index]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.types.len()
    }
}

pub fn synthesize(
    forest: &[SchemaNode],
    diagnostics: &mut Diagnostics,
) -> (TypeArena, Vec<usize>) {
    let mut arena = TypeArena { types: Vec::new() };
    let roots = synthesize_level(&mut arena, forest, diagnostics);
    (arena, roots)
}

/// Names already claimed at one nesting level: the node stems themselves,
/// and every method name their overloads occupy on the parent type.
#[derive(Default)]
struct LevelNames {
    stems: IndexSet<String>,
    methods: IndexSet<String>,
}

fn synthesize_level(
    arena: &mut TypeArena,
    nodes: &[SchemaNode],
    diagnostics: &mut Diagnostics,
) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut names = LevelNames::default();
    for node in nodes {
        if let Some(index) = synthesize_node(arena, node, &mut names, diagnostics) {
            indices.push(index);
        }
    }
    indices
}

fn synthesize_node(
    arena: &mut TypeArena,
    node: &SchemaNode,
    names: &mut LevelNames,
    diagnostics: &mut Diagnostics,
) -> Option<usize> {
    let span = node.name.span();
    let raw = node.name.to_string();
    let name = raw.strip_prefix("r#").unwrap_or(&raw).to_string();

    let stem = name.to_lowercase();
    if UNUSABLE_STEMS.contains(&stem.as_str()) {
        diagnostics.report(span, format!("`{name}` cannot name a schema node"));
        return None;
    }
    if RESERVED_STEMS.contains(&stem.as_str()) {
        diagnostics.report(
            span,
            format!("`{stem}` is reserved for the methods of the generated node types"),
        );
        return None;
    }
    if !names.stems.insert(stem.clone()) {
        diagnostics.report(
            span,
            format!("duplicate schema node `{stem}` in the same block"),
        );
        return None;
    }
    let overloads = [
        stem.clone(),
        format!("{stem}_attrs"),
        format!("{stem}_attrs_text"),
        format!("{stem}_text"),
        format!("{stem}_empty"),
    ];
    if let Some(clash) = overloads.iter().find(|method| names.methods.contains(*method)) {
        diagnostics.report(
            span,
            format!("`{stem}` would generate a method `{clash}` that a sibling node already defines"),
        );
        return None;
    }
    names.methods.extend(overloads);

    let type_ident = Ident::new(&capitalize(&name), span);
    let stem_ident = ident_for_stem(&stem, span);

    // Register before walking children: the slot exists even if a child
    // branch fails.
    let index = arena.types.len();
    arena.types.push(TypeDescriptor {
        stem,
        type_ident,
        stem_ident,
        children: Vec::new(),
    });
    let children = synthesize_level(arena, &node.children, diagnostics);
    arena.types[index].children = children;
    Some(index)
}
