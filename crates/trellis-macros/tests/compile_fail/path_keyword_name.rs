use trellis::{node_builder, schema};

#[node_builder]
struct Document {
    schema: schema! {
        SELF()
    },
}

fn main() {}
