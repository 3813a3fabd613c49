//! Re-export of the tree runtime; generated code refers to this path by
//! default.

pub use trellis_tree::{Attributes, DepthFirst, Node, Text, TreeNode, WriteError};
