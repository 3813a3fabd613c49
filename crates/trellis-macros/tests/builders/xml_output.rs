//! End-to-end: build through a generated builder, serialize via the tree
//! runtime.

use trellis::attrs;
use trellis::{node_builder, schema};

#[node_builder]
struct Html {
    schema: schema! {
        html {
            body {
                a()
                p()
            }
        }
    },
}

#[test]
fn built_tree_serializes_in_construction_order() {
    let builder = Html {};
    let html = builder.html(|html| {
        html.body(|body| {
            body.p_text("This is some text in the paragraph");
            body.a_attrs_text(
                attrs! { "href" => "http://www.link.com", "data" => "these are attributes" },
                "LINK",
            );
        });
    });

    assert_eq!(
        html.to_xml().unwrap(),
        "<html><body><p>This is some text in the paragraph</p>\
         <a href=\"http://www.link.com\" data=\"these are attributes\">LINK</a></body></html>"
    );
}

#[test]
fn attribute_order_matches_the_call_site() {
    let builder = Html {};
    let html = builder.html(|html| {
        html.body_attrs(attrs! { "z" => "1", "a" => "2" }, |_| {});
    });
    let body = &html.children()[0];
    assert_eq!(body.attributes().keys().collect::<Vec<_>>(), ["z", "a"]);
}
