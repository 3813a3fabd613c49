use trellis::{node_builder, schema};

#[node_builder]
struct Report {
    schema: schema! {
        summary()
        section {
            heading()
            para()
        }
    },
}

fn main() {
    let builder = Report {};
    builder.summary_text("overview");
    let section = builder.section(|section| {
        section.heading_text("First");
        section.para_text("body");
    });
    assert_eq!(section.children().len(), 2);
}
