//! Graph body statements

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Map;

use super::attributes::Attributes;
use super::document::{GraphDocument, GraphKind};
use super::value::Raw;

/// Keys that mark a JSON object as nested document options
const DOCUMENT_KEYS: &[&str] = &[
    "type",
    "name",
    "strict",
    "graph",
    "node",
    "edge",
    "styles",
    "css",
    "statements",
    "stmts",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Text emitted as-is, followed by `;`
    Plain(String),
    /// An already-escaped node name or edge chain with optional attributes
    Declared {
        name: String,
        attrs: Option<Attributes>,
    },
    /// Verbatim text, followed by `;`
    Raw(Raw),
    /// A nested document, always rendered as a `subgraph`
    Subgraph(Box<GraphDocument>),
    /// A hole in the statement list; renders nothing
    Empty,
}

impl Statement {
    pub fn declared(name: impl Into<String>, attrs: Option<Attributes>) -> Self {
        Statement::Declared {
            name: name.into(),
            attrs,
        }
    }

    pub fn subgraph(mut document: GraphDocument) -> Self {
        document.kind = GraphKind::Subgraph;
        Statement::Subgraph(Box::new(document))
    }

    /// Interpret one entry of a JSON `statements` list.
    ///
    /// Entries of an unrecognised shape become [`Statement::Empty`]. Only a
    /// nested document that fails to parse is an error.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        match value {
            serde_json::Value::String(text) => Ok(Statement::Plain(text)),
            serde_json::Value::Object(object) => Self::from_object(object),
            _ => Ok(Statement::Empty),
        }
    }

    fn from_object(mut object: Map<String, serde_json::Value>) -> Result<Self, serde_json::Error> {
        let stmt = object
            .remove("stmt")
            .or_else(|| object.remove("statement"));

        if let Some(stmt) = stmt {
            let attrs = object
                .remove("attrs")
                .or_else(|| object.remove("attributes"))
                .and_then(|attrs| serde_json::from_value::<Attributes>(attrs).ok());

            return match stmt {
                serde_json::Value::String(name) => Ok(Statement::Declared { name, attrs }),
                serde_json::Value::Object(_) => {
                    let document = serde_json::from_value::<GraphDocument>(stmt)?;
                    Ok(Statement::subgraph(document))
                }
                _ => Ok(Statement::Empty),
            };
        }

        if object.len() == 1
            && let Some(serde_json::Value::String(raw)) = object.get("raw")
        {
            return Ok(Statement::Raw(Raw::new(raw.clone())));
        }

        if object.keys().any(|key| DOCUMENT_KEYS.contains(&key.as_str())) {
            let document =
                serde_json::from_value::<GraphDocument>(serde_json::Value::Object(object))?;
            return Ok(Statement::subgraph(document));
        }

        Ok(Statement::Empty)
    }
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Statement::Plain(text) => serializer.serialize_str(text),
            Statement::Declared { name, attrs } => {
                let len = if attrs.is_some() { 2 } else { 1 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("stmt", name)?;
                if let Some(attrs) = attrs {
                    map.serialize_entry("attrs", attrs)?;
                }
                map.end()
            }
            Statement::Raw(raw) => raw.serialize(serializer),
            Statement::Subgraph(document) => document.serialize(serializer),
            Statement::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Statement::from_json(value).map_err(D::Error::custom)
    }
}
