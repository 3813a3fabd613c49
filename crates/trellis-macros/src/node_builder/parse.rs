//! Schema tree parser.
//!
//! The schema block is a sequence of declarations, each `name`, `name(...)`
//! with at most one `{ ... }` child block as argument, or `name { ... }`.
//! Parsing recovers per declaration: a malformed branch is reported and
//! dropped, siblings continue.

use std::iter::Peekable;

use proc_macro2::{Delimiter, Group, TokenStream, TokenTree, token_stream};
use syn::Ident;

use crate::diagnostics::Diagnostics;

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub name: Ident,
    pub children: Vec<SchemaNode>,
}

/// Shape of one declaration, after the leading name.
enum DeclShape {
    /// `name`
    Bare,
    /// `name(...)`
    Call(Group),
    /// `name { ... }`
    Block(Group),
    /// `name(...) { ... }`
    CallBlock(Group, Group),
}

/// Argument-list classification for the call shapes.
enum ArgShape {
    Empty,
    ChildBlock(Group),
    Invalid,
}

type Cursor = Peekable<token_stream::IntoIter>;

pub fn parse_block(tokens: TokenStream, diagnostics: &mut Diagnostics) -> Vec<SchemaNode> {
    let mut nodes = Vec::new();
    let mut cursor: Cursor = tokens.into_iter().peekable();
    while let Some(tree) = cursor.next() {
        let name = match tree {
            TokenTree::Ident(ident) => ident,
            TokenTree::Punct(punct) if matches!(punct.as_char(), ',' | ';') => continue,
            other => {
                diagnostics.report(
                    other.span(),
                    "expected a node declaration: `name`, `name(...)`, or `name { ... }`",
                );
                continue;
            }
        };
        let shape = read_shape(&mut cursor);

        // A declaration followed by anything but a separator or the next
        // declaration is not call-shaped: drop the whole branch.
        if let Some(TokenTree::Punct(punct)) = cursor.peek() {
            if !matches!(punct.as_char(), ',' | ';') {
                diagnostics.report(
                    punct.span(),
                    format!("declaration of `{name}` must be call-shaped: `{name}`, `{name}(...)`, or `{name} {{ ... }}`"),
                );
                skip_to_separator(&mut cursor);
                continue;
            }
        }

        let Some(children) = resolve_children(&name, shape, diagnostics) else {
            continue;
        };
        let children = match children {
            Some(block) => parse_block(block.stream(), diagnostics),
            None => Vec::new(),
        };
        nodes.push(SchemaNode { name, children });
    }
    nodes
}

fn read_shape(cursor: &mut Cursor) -> DeclShape {
    let args = next_group_if(cursor, Delimiter::Parenthesis);
    let block = next_group_if(cursor, Delimiter::Brace);
    match (args, block) {
        (None, None) => DeclShape::Bare,
        (Some(args), None) => DeclShape::Call(args),
        (None, Some(block)) => DeclShape::Block(block),
        (Some(args), Some(block)) => DeclShape::CallBlock(args, block),
    }
}

fn next_group_if(cursor: &mut Cursor, delimiter: Delimiter) -> Option<Group> {
    match cursor.peek() {
        Some(TokenTree::Group(group)) if group.delimiter() == delimiter => {
            let group = group.clone();
            cursor.next();
            Some(group)
        }
        _ => None,
    }
}

/// Returns the node's child block, `Some(None)` for a childless node, or
/// `None` when the branch is invalid and was reported.
fn resolve_children(
    name: &Ident,
    shape: DeclShape,
    diagnostics: &mut Diagnostics,
) -> Option<Option<Group>> {
    match shape {
        DeclShape::Bare => Some(None),
        DeclShape::Block(block) => Some(Some(block)),
        DeclShape::Call(args) => match classify_arguments(name, &args, diagnostics) {
            ArgShape::Empty => Some(None),
            ArgShape::ChildBlock(block) => Some(Some(block)),
            ArgShape::Invalid => None,
        },
        DeclShape::CallBlock(args, block) => match classify_arguments(name, &args, diagnostics) {
            ArgShape::Empty => Some(Some(block)),
            ArgShape::ChildBlock(_) => {
                diagnostics.report(
                    block.span(),
                    format!("node `{name}` has both an argument block and a trailing block"),
                );
                None
            }
            ArgShape::Invalid => None,
        },
    }
}

fn classify_arguments(name: &Ident, args: &Group, diagnostics: &mut Diagnostics) -> ArgShape {
    let mut trees: Vec<TokenTree> = args.stream().into_iter().collect();
    if matches!(trees.last(), Some(TokenTree::Punct(punct)) if punct.as_char() == ',') {
        trees.pop();
    }
    if trees.is_empty() {
        return ArgShape::Empty;
    }
    if trees.len() == 1 {
        if let TokenTree::Group(group) = &trees[0] {
            if group.delimiter() == Delimiter::Brace {
                return ArgShape::ChildBlock(group.clone());
            }
        }
    }
    diagnostics.report(
        args.span(),
        format!("arguments of node `{name}` must be empty or a single `{{ ... }}` child block"),
    );
    ArgShape::Invalid
}

/// Consumes the rest of a dropped branch: up to and including the next
/// separator, or up to (but excluding) the next identifier, whichever comes
/// first. Separators are optional, so stopping at an identifier keeps a
/// following declaration out of the dropped branch.
fn skip_to_separator(cursor: &mut Cursor) {
    while let Some(tree) = cursor.peek() {
        match tree {
            TokenTree::Punct(punct) if matches!(punct.as_char(), ',' | ';') => {
                cursor.next();
                break;
            }
            TokenTree::Ident(_) => break,
            _ => {
                cursor.next();
            }
        }
    }
}
