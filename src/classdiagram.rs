//! # Class diagrams from documentation metadata
//!
//! Builds an inheritance diagram around one class from a list of
//! [`ClassRecord`]s (as exported by documentation generators: a long name,
//! the names it augments, and `virtual`/`final` flags). Only the public
//! builder operations of [`GraphDocument`] are used.
//!
//! Styles referenced by the generated statements:
//!
//! | Style | Used on | Installed by default |
//! |---|---|---|
//! | `node_class`, `class` | every class node | `node_class` |
//! | `node_selected` | the selected class | no |
//! | `edge_extends`, `extends` | every edge | `edge_extends` |
//! | `edge_implements`, `implements` | edges to virtual parents | `edge_implements` |

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::attrs;
use crate::error::JsonGraphError;
use crate::model::{AttrMap, GraphDocument, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub longname: String,
    #[serde(default)]
    pub augments: Vec<String>,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
}

impl ClassRecord {
    pub fn new(longname: impl Into<String>) -> Self {
        Self {
            longname: longname.into(),
            augments: Vec::new(),
            is_virtual: false,
            is_final: false,
        }
    }

    pub fn augmenting(mut self, parent: impl Into<String>) -> Self {
        self.augments.push(parent.into());
        self
    }

    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        self.is_virtual = is_virtual;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// `abstract class X`, `final class X` or `class X`
    pub fn full_name(&self) -> String {
        let prefix = if self.is_virtual {
            "abstract "
        } else if self.is_final {
            "final "
        } else {
            ""
        };
        format!("{prefix}class {}", self.longname)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDiagramOptions {
    /// Class the diagram is centred on
    pub class_name: String,
    /// Include ancestors
    pub parents: bool,
    /// Include descendants
    pub children: bool,
    /// Add `URL=<name>.html` to each node
    pub links: bool,
    /// Highlight the centre class
    pub select: bool,
    /// Clear existing statements first
    pub reset: bool,
    /// Rename the document `class <name> diagram`
    pub change_name: bool,
}

impl ClassDiagramOptions {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parents: true,
            children: true,
            links: false,
            select: true,
            reset: true,
            change_name: true,
        }
    }

    pub fn with_parents(mut self, parents: bool) -> Self {
        self.parents = parents;
        self
    }

    pub fn with_children(mut self, children: bool) -> Self {
        self.children = children;
        self
    }

    pub fn with_links(mut self, links: bool) -> Self {
        self.links = links;
        self
    }

    pub fn with_select(mut self, select: bool) -> Self {
        self.select = select;
        self
    }

    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn with_change_name(mut self, change_name: bool) -> Self {
        self.change_name = change_name;
        self
    }
}

/// Inheritance graph over a set of class records. Edges point from a class
/// to the classes it augments.
pub struct ClassHierarchy<'a> {
    graph: DiGraph<&'a ClassRecord, ()>,
    by_name: HashMap<&'a str, NodeIndex>,
}

impl<'a> ClassHierarchy<'a> {
    pub fn new(records: &'a [ClassRecord]) -> Self {
        let mut graph = DiGraph::new();
        let mut by_name = HashMap::new();

        for record in records {
            let index = graph.add_node(record);
            by_name.insert(record.longname.as_str(), index);
        }

        for record in records {
            let child = by_name[record.longname.as_str()];
            for parent in &record.augments {
                if let Some(&parent) = by_name.get(parent.as_str()) {
                    graph.add_edge(child, parent, ());
                }
            }
        }

        Self { graph, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a ClassRecord> {
        self.by_name.get(name).map(|&index| self.graph[index])
    }

    /// Known parents of `name`, in `augments` order
    pub fn parents_of(&self, name: &str) -> Vec<&'a ClassRecord> {
        self.by_name
            .get(name)
            .map(|&index| {
                self.related(index, Direction::Outgoing)
                    .into_iter()
                    .map(|related| self.graph[related])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Direct subclasses of `name`, in record order
    pub fn children_of(&self, name: &str) -> Vec<&'a ClassRecord> {
        self.by_name
            .get(name)
            .map(|&index| {
                self.related(index, Direction::Incoming)
                    .into_iter()
                    .map(|related| self.graph[related])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn related(&self, index: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        match direction {
            Direction::Outgoing => self.graph[index]
                .augments
                .iter()
                .filter_map(|parent| self.by_name.get(parent.as_str()).copied())
                .collect(),
            Direction::Incoming => {
                let mut children: Vec<NodeIndex> = self
                    .graph
                    .neighbors_directed(index, Direction::Incoming)
                    .collect();
                children.sort();
                children.dedup();
                children
            }
        }
    }
}

impl GraphDocument {
    /// Populate this document with the inheritance diagram of
    /// `options.class_name`.
    pub fn add_class_diagram(
        &mut self,
        records: &[ClassRecord],
        options: &ClassDiagramOptions,
    ) -> Result<&mut Self, JsonGraphError> {
        let hierarchy = ClassHierarchy::new(records);
        let centre = *hierarchy
            .by_name
            .get(options.class_name.as_str())
            .ok_or_else(|| JsonGraphError::ConfigurationError {
                message: format!("Unknown class '{}'", options.class_name),
            })?;

        if options.change_name {
            self.name = format!("class {} diagram", options.class_name);
        }

        self.graph.insert("rankdir", "BT");
        self.styles
            .entry("edge_extends".to_string())
            .or_insert_with(|| attrs! { "arrowhead" => "empty" });
        self.styles
            .entry("edge_implements".to_string())
            .or_insert_with(|| attrs! { "style" => "dashed" });
        self.styles
            .entry("node_class".to_string())
            .or_insert_with(|| attrs! { "shape" => "rect", "style" => "rounded,filled" });

        self.reset();
        if options.reset {
            self.statements.clear();
        }

        let mut builder = DiagramBuilder {
            document: self,
            hierarchy: &hierarchy,
            options,
            added: HashSet::new(),
        };

        builder.add_class(centre, options.select);
        if options.parents {
            builder.walk(centre, Direction::Outgoing, &mut HashSet::new());
        }
        if options.children {
            builder.walk(centre, Direction::Incoming, &mut HashSet::new());
        }

        Ok(self)
    }
}

struct DiagramBuilder<'d, 'h, 'a> {
    document: &'d mut GraphDocument,
    hierarchy: &'h ClassHierarchy<'a>,
    options: &'h ClassDiagramOptions,
    added: HashSet<NodeIndex>,
}

impl DiagramBuilder<'_, '_, '_> {
    fn add_class(&mut self, index: NodeIndex, select: bool) {
        if !self.added.insert(index) {
            return;
        }

        let class = self.hierarchy.graph[index];
        let mut refs = vec!["node_class", "class"];
        let mut text_styles = Vec::new();
        if select {
            refs.push("node_selected");
            text_styles.push("bold");
        }
        if class.is_virtual {
            text_styles.push("italic");
        }

        let mut attrs = AttrMap::new();
        attrs.insert("ref".to_string(), Value::from(refs));
        if !text_styles.is_empty() {
            attrs.insert("textstyle".to_string(), Value::from(text_styles));
        }
        attrs.insert("tooltip".to_string(), Value::from(class.full_name()));
        if self.options.links {
            attrs.insert(
                "URL".to_string(),
                Value::from(format!("{}.html", class.longname)),
            );
        }

        self.document.add_node(class.longname.as_str(), Some(attrs));
    }

    /// Follow the hierarchy from `from` towards ancestors (`Outgoing`) or
    /// descendants (`Incoming`), adding every class and edge once.
    fn walk(&mut self, from: NodeIndex, direction: Direction, walked: &mut HashSet<NodeIndex>) {
        walked.insert(from);

        for member in self.hierarchy.related(from, direction) {
            self.add_class(member, false);

            let (child, parent) = match direction {
                Direction::Outgoing => (from, member),
                Direction::Incoming => (member, from),
            };
            let child = self.hierarchy.graph[child];
            let parent = self.hierarchy.graph[parent];

            let relation = if parent.is_virtual {
                "implements"
            } else {
                "extends"
            };
            let mut refs = vec!["edge_extends", "extends"];
            if parent.is_virtual {
                refs.extend(["edge_implements", "implements"]);
            }

            let attrs = attrs! {
                "edgetooltip" => format!("{} {relation} {}", child.longname, parent.longname),
                "ref" => refs,
            };
            self.document.add_edge(
                [child.longname.as_str(), parent.longname.as_str()],
                Some(attrs),
            );

            if !walked.contains(&member) {
                self.walk(member, direction, walked);
            }
        }
    }
}
