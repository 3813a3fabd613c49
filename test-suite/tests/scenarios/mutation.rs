//! Built trees stay live handles: mutation through the runtime API is
//! visible through every handle to the same node.

use test_suite::Article;
use trellis::tree::{Text, TreeNode as _};

#[test]
fn mutation_is_visible_through_all_handles() {
    let builder = Article {};
    let section = builder.section(|section| {
        section.para_text("draft");
    });

    let para = &section.children()[0];
    para.set_text("final");
    para.set_attribute("revised", "true");

    assert_eq!(section.children()[0].text(), Some(Text::from("final")));
    assert_eq!(
        section.children()[0].attribute("revised"),
        Some("true".to_string())
    );
}

#[test]
fn detached_subtrees_can_be_reattached_elsewhere() {
    let builder = Article {};
    let first = builder.section(|section| {
        section.para_text("movable");
    });
    let second = builder.section_empty();

    let para = &first.children()[0];
    second.node().append(para);

    assert!(first.children().is_empty());
    assert_eq!(second.children().len(), 1);
    assert_eq!(para.parent(), Some(second.node().clone()));
}
