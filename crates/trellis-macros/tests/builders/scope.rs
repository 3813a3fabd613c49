//! The block parameter of the block-accepting overloads is the freshly
//! constructed child, so unqualified construction calls inside a block
//! resolve against that child and not the enclosing scope.

use trellis::{node_builder, schema};

#[node_builder]
struct Page {
    schema: schema! {
        body {
            section {
                para()
            }
        }
    },
}

#[test]
fn block_receives_exactly_the_returned_instance() {
    let builder = Page {};
    let mut seen = None;
    let body = builder.body(|body| {
        seen = Some(body.clone());
    });
    assert_eq!(seen, Some(body));
}

#[test]
fn nested_calls_resolve_against_the_child_instance() {
    let builder = Page {};
    let body = builder.body(|body| {
        body.section(|section| {
            section.para_empty();
            section.para_empty();
        });
        body.section(|_| {});
    });

    let sections = body.children();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].children().len(), 2);
    assert!(sections[1].children().is_empty());
    assert_eq!(sections[0].children()[0].name(), "para");
}

#[test]
fn blocks_on_different_nesting_levels_do_not_leak_into_each_other() {
    let builder = Page {};
    let outer = builder.body(|body| {
        let section = body.section(|_| {});
        // Construction after the block still appends to the section.
        section.para_text("late");
    });
    assert_eq!(outer.children().len(), 1);
    assert_eq!(outer.children()[0].children().len(), 1);
    assert_eq!(outer.children()[0].children()[0].name(), "para");
}
