//! Shared builders for the end-to-end scenarios.

use trellis::{node_builder, schema};

/// A small article vocabulary: metadata, then sections of headed prose.
#[node_builder]
pub struct Article {
    schema: schema! {
        meta {
            author()
            published()
        }
        section {
            heading()
            para()
            code()
        }
    },
}

/// Feed vocabulary with the same `title` node name at two nesting levels;
/// the generated types are distinct per level.
#[node_builder]
pub struct Feed {
    schema: schema! {
        title()
        channel {
            title()
            item {
                title()
                link()
            }
        }
    },
}
