//! # Graph Document Model
//!
//! An in-memory tree of graph documents. Each [`GraphDocument`] carries
//! default attribute buckets (`graph`, `node`, `edge`), a style table, CSS
//! rules and an ordered list of [`Statement`]s. Subgraphs are documents
//! nested inside statements.
//!
//! Builders append statements and return their index:
//!
//! ```
//! use jsongraph::attrs;
//! use jsongraph::model::{Field, GraphDocument, GraphKind};
//!
//! let mut graph = GraphDocument::new(GraphKind::Digraph).with_name("G");
//! graph.add_node("a", Some(attrs! { "color" => "red" }));
//! graph.add_struct("rec", &[Field::from("x"), Field::group(["y", "z"])], None);
//! let edge = graph.add_edge(["a", "rec"], None);
//!
//! assert_eq!(edge, 2);
//! assert!(graph.dot().contains("\"a\"->\"rec\";"));
//! ```

mod attributes;
mod document;
mod record;
mod statement;
mod value;

pub use attributes::{
    AttrMap, Attributes, LABEL_KEY, STYLE_REF_KEY, StyleTable, TEXT_STYLE_KEY,
};
pub use document::{GraphDocument, GraphKind};
pub use record::{Field, record_label};
pub use statement::Statement;
pub use value::{Endpoint, HtmlLabel, Raw, Value};
