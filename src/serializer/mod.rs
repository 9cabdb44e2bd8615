//! # DOT Serializer
//!
//! Recursive-descent rendering of a [`GraphDocument`] tree into DOT text.
//!
//! Layout of a rendered document, one tab per nesting level:
//!
//! ```text
//! strict digraph "G"
//! {
//!     graph [...];
//!     node [...];
//!     edge [...];
//!     <statements in list order>
//! }
//! ```
//!
//! Default-attribute lines appear only when they render non-empty.
//! Subgraphs recurse with one more level of indentation and are followed by
//! a newline instead of `;`.

mod attributes;
mod markup;

use attributes::StyleScope;

use crate::escape::quote_text;
use crate::model::{GraphDocument, GraphKind, Statement};

/// Render a document and everything nested in it.
///
/// This is the uncached path behind [`GraphDocument::dot`].
pub fn render_document(document: &GraphDocument) -> String {
    let mut scope = StyleScope::default();
    render(document, "", false, &mut scope)
}

fn render<'a>(
    document: &'a GraphDocument,
    tab: &str,
    nested: bool,
    scope: &mut StyleScope<'a>,
) -> String {
    scope.enter(&document.styles);

    let kind = if nested {
        GraphKind::Subgraph
    } else {
        document.kind
    };

    let mut out = String::new();
    out.push_str(tab);
    if document.strict {
        out.push_str("strict ");
    }
    out.push_str(kind.keyword());
    if !document.name.is_empty() {
        out.push(' ');
        out.push_str(&quote_text(&document.name));
    }
    out.push('\n');
    out.push_str(tab);
    out.push_str("{\n");

    let inner = format!("{tab}\t");
    for (keyword, bucket) in [
        ("graph", &document.graph),
        ("node", &document.node),
        ("edge", &document.edge),
    ] {
        let list = scope.attribute_list(bucket, None);
        if !list.is_empty() {
            out.push_str(&inner);
            out.push_str(keyword);
            out.push_str(&list);
            out.push_str(";\n");
        }
    }

    for statement in &document.statements {
        out.push_str(&render_statement(statement, &inner, scope));
    }

    out.push_str(tab);
    out.push('}');

    scope.leave();
    out
}

fn render_statement<'a>(
    statement: &'a Statement,
    tab: &str,
    scope: &mut StyleScope<'a>,
) -> String {
    match statement {
        Statement::Plain(text) => format!("{tab}{text};\n"),
        Statement::Declared { name, attrs } => {
            let list = attrs
                .as_ref()
                .map(|attrs| scope.attribute_list(attrs, Some(name.as_str())))
                .unwrap_or_default();

            if name.is_empty() && list.is_empty() {
                String::new()
            } else {
                format!("{tab}{name}{list};\n")
            }
        }
        Statement::Raw(raw) => format!("{tab}{};\n", raw.content()),
        Statement::Subgraph(document) => format!("{}\n", render(document, tab, true, scope)),
        Statement::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attrs;
    use crate::model::{Attributes, Raw, Value};

    #[test]
    fn test_empty_graph() {
        let document = GraphDocument::new(GraphKind::Graph);
        assert_eq!(render_document(&document), "graph\n{\n}");
    }

    #[test]
    fn test_header_with_strict_and_name() {
        let document = GraphDocument::new(GraphKind::Digraph)
            .with_strict(true)
            .with_name("my \"graph\"");
        assert_eq!(
            render_document(&document),
            "strict digraph \"my \\&quot;graph\\&quot;\"\n{\n}"
        );
    }

    #[test]
    fn test_default_buckets_in_fixed_order() {
        let document = GraphDocument::default()
            .with_edge_attrs(attrs! { "arrowhead" => "empty" })
            .with_graph_attrs(attrs! { "rankdir" => "LR" })
            .with_style("boxed", attrs! { "shape" => "box" })
            .with_node_attrs(Attributes::Styles(Value::from("boxed")));

        assert_eq!(
            render_document(&document),
            "digraph\n{\n\
             \tgraph [\"rankdir\"=\"LR\"];\n\
             \tnode [\"shape\"=\"box\"];\n\
             \tedge [\"arrowhead\"=\"empty\"];\n\
             }"
        );
    }

    #[test]
    fn test_statement_kinds_in_order() {
        let mut inner = GraphDocument::new(GraphKind::Digraph).with_name("cluster_x");
        inner.add_node("x", None);

        let document = GraphDocument::default().with_statements(vec![
            Statement::Plain("rankdir=LR".to_string()),
            Statement::Empty,
            Statement::declared("\"a\"", Some(attrs! { "color" => "red" }.into())),
            Statement::Raw(Raw::new("\"a\" -> \"b\" [style=dotted]")),
            Statement::Subgraph(Box::new(inner)),
            Statement::declared("", None),
        ]);

        assert_eq!(
            render_document(&document),
            "digraph\n{\n\
             \trankdir=LR;\n\
             \t\"a\" [\"color\"=\"red\"];\n\
             \t\"a\" -> \"b\" [style=dotted];\n\
             \tsubgraph \"cluster_x\"\n\
             \t{\n\
             \t\t\"x\";\n\
             \t}\n\
             }"
        );
    }

    #[test]
    fn test_subgraph_sees_parent_styles() {
        let mut inner = GraphDocument::new(GraphKind::Subgraph);
        inner.add_node("x", Some(attrs! { "ref" => "red" }));

        let mut document =
            GraphDocument::default().with_style("red", attrs! { "color" => "red" });
        document.add_subgraph(inner);

        assert!(
            render_document(&document).contains("\t\t\"x\" [\"color\"=\"red\"];\n")
        );
    }

    #[test]
    fn test_declared_rich_label_uses_node_name() {
        let mut document = GraphDocument::default();
        document.add_node("Base", Some(attrs! { "textstyle" => vec!["bold", "italic"] }));

        assert!(
            render_document(&document).contains("\t\"Base\" [label=<<b><i>Base</i></b>>];\n")
        );
    }
}
