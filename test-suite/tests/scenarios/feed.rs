//! Same node name at several nesting levels: one generated type per schema
//! path, one method set per enclosing type.

use test_suite::{Feed, feed};
use trellis::tree::TreeNode as _;

#[test]
fn title_types_are_distinct_per_level() {
    let builder = Feed {};
    let top: feed::Title = builder.title_text("top");
    let channel = builder.channel(|channel| {
        let mid: feed::channel::Title = channel.title_text("mid");
        assert_eq!(mid.node().parent().unwrap().name(), "channel");
        channel.item(|item| {
            let leaf: feed::channel::item::Title = item.title_text("leaf");
            assert_eq!(leaf.node().parent().unwrap().name(), "item");
        });
    });

    assert_eq!(top.name(), "title");
    assert_eq!(channel.children().len(), 2);
}

#[test]
fn sibling_kinds_only_exist_where_the_schema_allows_them() {
    let builder = Feed {};
    let channel = builder.channel(|channel| {
        channel.item(|item| {
            item.link_text("https://example.com");
        });
    });
    let item = &channel.children()[0];
    assert_eq!(item.children()[0].name(), "link");
}
