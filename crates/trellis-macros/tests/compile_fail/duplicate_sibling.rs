use trellis::{node_builder, schema};

#[node_builder]
struct Catalog {
    schema: schema! {
        item()
        Item()
    },
}

fn main() {}
