//! Each node gets all five construction overloads, childless nodes included.

use trellis::tree::{Text, TreeNode as _};
use trellis::{node_builder, schema};
use trellis_tree::attrs;

#[node_builder]
struct Doc {
    schema: schema! {
        entry {
            note()
        }
    },
}

#[test]
fn block_overload_builds_and_returns_the_node() {
    let builder = Doc {};
    let entry = builder.entry(|entry| {
        entry.note_empty();
    });
    assert_eq!(entry.name(), "entry");
    assert_eq!(entry.children().len(), 1);
    assert_eq!(entry.children()[0].name(), "note");
}

#[test]
fn attrs_block_overload_sets_attributes_before_the_block_runs() {
    let builder = Doc {};
    let entry = builder.entry_attrs(attrs! { "id" => "e1" }, |entry| {
        assert_eq!(entry.attribute("id"), Some("e1".to_string()));
    });
    assert_eq!(entry.attribute("id"), Some("e1".to_string()));
}

#[test]
fn attrs_text_overload_builds_a_leaf() {
    let builder = Doc {};
    let entry = builder.entry_attrs_text(attrs! { "id" => "e2" }, "body");
    assert_eq!(entry.text(), Some(Text::from("body")));
    assert_eq!(entry.attribute("id"), Some("e2".to_string()));
    assert!(entry.children().is_empty());
}

#[test]
fn text_overload_builds_a_leaf() {
    let builder = Doc {};
    let entry = builder.entry_text(42);
    assert_eq!(entry.text(), Some(Text::from(42)));
    assert!(entry.attributes().is_empty());
}

#[test]
fn empty_overload_builds_a_bare_node() {
    let builder = Doc {};
    let entry = builder.entry_empty();
    assert_eq!(entry.name(), "entry");
    assert_eq!(entry.text(), None);
    assert!(entry.children().is_empty());
}

#[test]
fn childless_nodes_still_have_all_five_overloads() {
    let builder = Doc {};
    let entry = builder.entry_empty();
    entry.note(|_| {});
    entry.note_attrs(attrs! { "k" => "v" }, |_| {});
    entry.note_attrs_text(attrs! { "k" => "v" }, "t");
    entry.note_text("t");
    entry.note_empty();
    assert_eq!(entry.children().len(), 5);
}

#[test]
fn top_level_nodes_have_no_parent() {
    let builder = Doc {};
    let entry = builder.entry_empty();
    assert_eq!(entry.node().parent(), None);
}
