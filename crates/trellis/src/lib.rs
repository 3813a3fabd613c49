//! Schema-constrained node-tree builders.
//!
//! Annotate a struct with [`macro@node_builder`] and describe the allowed
//! tree shape in its `schema` field. The macro generates one wrapper type
//! per schema node and five construction methods per node on the enclosing
//! type, so only trees matching the schema compile:
//!
//! ```
//! use trellis::{attrs, node_builder, schema};
//!
//! #[node_builder]
//! struct Html {
//!     schema: schema! {
//!         html {
//!             body {
//!                 a()
//!                 p()
//!             }
//!         }
//!     },
//! }
//!
//! let builder = Html {};
//! let html = builder.html(|html| {
//!     html.body(|body| {
//!         body.p_text("This is some text in the paragraph");
//!         body.a_attrs_text(attrs! { "href" => "http://www.link.com" }, "LINK");
//!     });
//! });
//! assert_eq!(html.children().len(), 1);
//! ```
//!
//! The schema itself never survives expansion: the `schema` field is
//! removed from the struct and the tree shape exists only in the generated
//! types and methods.

pub mod tree;

pub use trellis_macros::{node_builder, schema};
pub use trellis_tree::attrs;
