//! The graph document and its builder operations

use std::cell::OnceCell;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::attributes::{AttrMap, Attributes, LABEL_KEY, StyleTable};
use super::record::{self, Field};
use super::statement::Statement;
use super::value::{Endpoint, Raw, Value};
use crate::css::CssRule;
use crate::error::{JsonGraphError, JsonParseError};
use crate::escape::{Quote, escape_string, quote_id};

/// DOT keyword of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Graph,
    #[default]
    Digraph,
    Subgraph,
}

impl GraphKind {
    pub fn keyword(self) -> &'static str {
        match self {
            GraphKind::Graph => "graph",
            GraphKind::Digraph => "digraph",
            GraphKind::Subgraph => "subgraph",
        }
    }

    /// Edge operator for this kind. Only an undirected `graph` uses `--`.
    pub fn edge_op(self) -> &'static str {
        match self {
            GraphKind::Graph => "--",
            GraphKind::Digraph | GraphKind::Subgraph => "->",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A graph, digraph or subgraph with its default attributes, style table
/// and ordered statement list.
///
/// Serialization to DOT is memoized: [`GraphDocument::dot`] computes the
/// text once and returns the cached copy until [`GraphDocument::reset`] is
/// called. Mutating the public fields or calling a builder does **not**
/// invalidate the cache; call `reset()` before re-serializing.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphDocument {
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
    #[serde(rename = "type")]
    pub kind: GraphKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub graph: Attributes,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub node: Attributes,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub edge: Attributes,
    #[serde(skip_serializing_if = "StyleTable::is_empty")]
    pub styles: StyleTable,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<CssRule>,
    #[serde(alias = "stmts", skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<Statement>,
    #[serde(skip)]
    cached: OnceCell<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl GraphDocument {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_graph_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.graph = attrs.into();
        self
    }

    pub fn with_node_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.node = attrs.into();
        self
    }

    pub fn with_edge_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.edge = attrs.into();
        self
    }

    pub fn with_style(mut self, name: impl Into<String>, attrs: AttrMap) -> Self {
        self.styles.insert(name.into(), attrs);
        self
    }

    pub fn with_css(mut self, rule: CssRule) -> Self {
        self.css.push(rule);
        self
    }

    pub fn with_statements(mut self, statements: Vec<Statement>) -> Self {
        self.statements = statements;
        self
    }

    /// DOT text for this document, computed on first use.
    pub fn dot(&self) -> &str {
        self.cached
            .get_or_init(|| crate::serializer::render_document(self))
    }

    /// Drop the memoized DOT text.
    pub fn reset(&mut self) -> &mut Self {
        self.cached.take();
        self
    }

    pub fn is_cached(&self) -> bool {
        self.cached.get().is_some()
    }

    fn push(&mut self, statement: Statement) -> usize {
        self.statements.push(statement);
        self.statements.len() - 1
    }

    /// Declare a node. Returns the index of the new statement.
    pub fn add_node(&mut self, name: impl Into<Value>, attrs: Option<AttrMap>) -> usize {
        let name = quote_id(&name.into());
        self.push(Statement::declared(name, attrs.map(Attributes::Map)))
    }

    /// Declare an edge chain through `nodes`. Returns the index of the new
    /// statement.
    pub fn link_nodes<I, E>(&mut self, nodes: I, attrs: Option<AttrMap>) -> usize
    where
        I: IntoIterator<Item = E>,
        E: Into<Endpoint>,
    {
        let chain = nodes
            .into_iter()
            .map(|node| match node.into() {
                Endpoint::Node(name) => quote_id(&name),
                Endpoint::Port(name, port) => format!("{}:{}", quote_id(&name), quote_id(&port)),
            })
            .collect::<Vec<_>>()
            .join(self.kind.edge_op());

        self.push(Statement::declared(chain, attrs.map(Attributes::Map)))
    }

    /// Same as [`GraphDocument::link_nodes`].
    pub fn add_edge<I, E>(&mut self, nodes: I, attrs: Option<AttrMap>) -> usize
    where
        I: IntoIterator<Item = E>,
        E: Into<Endpoint>,
    {
        self.link_nodes(nodes, attrs)
    }

    /// Declare a `record` node whose label is built from `fields`.
    ///
    /// `shape` gains `record`, appended after any shape already present. The
    /// label is string-escaped only, so field ports keep their `<...>` form.
    pub fn add_struct(
        &mut self,
        name: impl Into<Value>,
        fields: &[Field],
        attrs: Option<AttrMap>,
    ) -> usize {
        let mut attrs = attrs.unwrap_or_default();

        let shape = match attrs.get("shape") {
            Some(existing) if !existing.to_text().is_empty() => {
                format!("{},record", existing.to_text())
            }
            _ => "record".to_string(),
        };
        attrs.insert("shape".to_string(), Value::Text(shape));
        // Graphviz reads record fields before entities, so the `<port>`
        // markers must stay unescaped
        let label = escape_string(&record::record_label(fields), Quote::Double);
        attrs.insert(
            LABEL_KEY.to_string(),
            Value::Raw(Raw::new(format!("\"{label}\""))),
        );

        self.add_node(name, Some(attrs))
    }

    /// Embed `document` as a subgraph. Its kind is forced to `subgraph`.
    pub fn add_subgraph(&mut self, document: GraphDocument) -> usize {
        self.push(Statement::subgraph(document))
    }

    /// Embed a subgraph given as JSON document options.
    pub fn add_subgraph_json(
        &mut self,
        options: serde_json::Value,
    ) -> Result<usize, JsonGraphError> {
        let document = GraphDocument::from_value(options)?;
        Ok(self.add_subgraph(document))
    }

    /// Append verbatim text.
    pub fn add_raw(&mut self, text: impl Into<String>) -> usize {
        self.push(Statement::Raw(Raw::new(text)))
    }

    /// Deep copy under a new name. The copy starts with no memoized text.
    pub fn clone_as(&self, name: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.name = name.into();
        copy
    }

    /// Structural snapshot suitable for [`GraphDocument::import`].
    pub fn to_json(&self) -> Result<serde_json::Value, JsonGraphError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, JsonGraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a document from inline JSON or from a JSON file.
    ///
    /// Text whose first non-blank character is `{` is parsed directly;
    /// anything else is treated as a path.
    pub fn import(source: &str) -> Result<Self, JsonGraphError> {
        if source.trim_start().starts_with('{') {
            Self::parse(source, "<inline>")
        } else {
            Self::import_file(Path::new(source))
        }
    }

    pub fn import_file(path: &Path) -> Result<Self, JsonGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| JsonGraphError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, JsonGraphError> {
        Ok(serde_json::from_value(value)?)
    }

    fn parse(content: &str, origin: &str) -> Result<Self, JsonGraphError> {
        serde_json::from_str(content).map_err(|e| {
            JsonGraphError::JsonParseError(Box::new(JsonParseError::new(origin, content, e)))
        })
    }
}

impl Clone for GraphDocument {
    fn clone(&self) -> Self {
        Self {
            strict: self.strict,
            kind: self.kind,
            name: self.name.clone(),
            graph: self.graph.clone(),
            node: self.node.clone(),
            edge: self.edge.clone(),
            styles: self.styles.clone(),
            css: self.css.clone(),
            statements: self.statements.clone(),
            cached: OnceCell::new(),
        }
    }
}

impl PartialEq for GraphDocument {
    fn eq(&self, other: &Self) -> bool {
        self.strict == other.strict
            && self.kind == other.kind
            && self.name == other.name
            && self.graph == other.graph
            && self.node == other.node
            && self.edge == other.edge
            && self.styles == other.styles
            && self.css == other.css
            && self.statements == other.statements
    }
}

impl fmt::Display for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dot())
    }
}
