//! Runtime node tree backing trellis-generated builders.
//!
//! Generated builder types wrap a [`Node`] and forward its constructor
//! surface. Everything here is usable without the macros as well: a [`Node`]
//! is a shared handle to a named element with ordered [`Attributes`], an
//! optional [`Text`] payload, and an ordered child list with parent links.

mod attributes;
mod node;
mod text;
mod xml;

pub use attributes::Attributes;
pub use node::{DepthFirst, Node};
pub use text::Text;
pub use xml::WriteError;

/// Access to the underlying [`Node`] of a generated builder type.
///
/// Every type emitted by `#[node_builder]` implements this trait, so code
/// that works on raw nodes can accept any generated node kind.
pub trait TreeNode {
    fn node(&self) -> &Node;
    fn into_node(self) -> Node;
}

impl TreeNode for Node {
    fn node(&self) -> &Node {
        self
    }

    fn into_node(self) -> Node {
        self
    }
}
