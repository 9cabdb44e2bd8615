//! # jsongraph - JSON graph descriptions to Graphviz DOT
//!
//! jsongraph turns a JSON description of a graph (nodes, edges, subgraphs,
//! named styles and rich-text labels) into DOT text for Graphviz, and can run
//! a Graphviz layout program to produce the rendered diagram.
//!
//! ## Main Components
//!
//! - **Escape**: DOT-safe identifiers and the `Raw` / `HtmlLabel` bypasses
//! - **Model**: the [`GraphDocument`](model::GraphDocument) tree and its
//!   builder operations
//! - **Serializer**: recursive, memoized DOT rendering with style-reference
//!   and text-style expansion
//! - **Layout**: the boundary to the layout engine and rendered output
//! - **Class diagrams**: inheritance diagrams from documentation metadata
//!
//! ## Usage
//!
//! ### Example: From JSON to DOT
//!
//! ```
//! use jsongraph::model::GraphDocument;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = GraphDocument::import(
//!     r#"{
//!         "type": "digraph",
//!         "name": "G",
//!         "statements": [{"stmt": "\"a\""}, {"stmt": "\"b\""}]
//!     }"#,
//! )?;
//! graph.add_edge(["a", "b"], None);
//!
//! assert_eq!(
//!     graph.dot(),
//!     "digraph \"G\"\n{\n\t\"a\";\n\t\"b\";\n\t\"a\"->\"b\";\n}"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Styles and rich labels
//!
//! ```
//! use jsongraph::attrs;
//! use jsongraph::model::{GraphDocument, GraphKind};
//!
//! let mut graph = GraphDocument::new(GraphKind::Digraph)
//!     .with_style("warn", attrs! { "color" => "orange" })
//!     .with_style("boxed", attrs! { "shape" => "box" });
//!
//! graph.add_node(
//!     "disk",
//!     Some(attrs! {
//!         "ref" => vec!["warn", "boxed"],
//!         "label" => "Disk full",
//!         "textstyle" => vec!["bold"],
//!     }),
//! );
//!
//! assert!(graph.dot().contains(
//!     "\"disk\" [\"color\"=\"orange\", \"shape\"=\"box\", label=<<b>Disk full</b>>];"
//! ));
//! ```
//!
//! ### Example: Rendering with Graphviz
//!
//! ```no_run
//! use jsongraph::layout::{GraphvizCommand, LayoutOptions};
//! use jsongraph::model::GraphDocument;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = GraphDocument::import("graphs/pipeline.json")?;
//! let svg = graph.generate(&GraphvizCommand::default(), &LayoutOptions::default())?;
//! svg.embed_css(&graph.css_text()).save("pipeline.svg")?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;

// Public modules
pub mod classdiagram;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod css;
pub mod error;
pub mod escape;
pub mod executors;
pub mod layout;
pub mod model;
pub mod serializer;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
