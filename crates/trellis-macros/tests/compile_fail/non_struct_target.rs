use trellis::node_builder;

#[node_builder]
enum Shape {
    Circle,
    Square,
}

fn main() {}
