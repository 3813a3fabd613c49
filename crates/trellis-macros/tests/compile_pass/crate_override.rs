//! The generated code can be pointed at the tree runtime directly instead
//! of the `::trellis::tree` facade path.

use trellis_macros::{node_builder, schema};

#[node_builder(crate = ::trellis_tree)]
struct Doc {
    schema: schema! {
        entry()
    },
}

fn main() {
    let builder = Doc {};
    let entry = builder.entry_empty();
    assert_eq!(entry.name(), "entry");
}
