//! Keyword and mixed-case node names.

use trellis::{node_builder, schema};

#[node_builder]
struct Meta {
    schema: schema! {
        r#type()
        dataPoint()
    },
}

#[test]
fn keyword_nodes_are_reachable_through_raw_identifiers() {
    let builder = Meta {};
    let node = builder.r#type(|_| {});
    assert_eq!(node.name(), "type");
    // Suffixed overloads drop the raw prefix.
    assert_eq!(builder.type_empty().name(), "type");
}

#[test]
fn method_stems_are_lower_cased_and_types_capitalized() {
    let builder = Meta {};
    let point: meta::DataPoint = builder.datapoint_empty();
    assert_eq!(point.name(), "datapoint");
}
