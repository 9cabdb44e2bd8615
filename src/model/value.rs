//! Scalar and wrapper values
//!
//! A [`Value`] is anything that can stand where DOT expects an identifier:
//! a node name, an attribute value, a style-reference list or a text-style
//! tag list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Content written verbatim, with no quoting or escaping.
///
/// Serialized as `{"raw": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Raw {
    raw: String,
}

impl Raw {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            raw: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// HTML-like label content, written between `<` and `>`.
///
/// The content is not escaped; callers supply valid markup. Serialized as
/// `{"html": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HtmlLabel {
    html: String,
}

impl HtmlLabel {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            html: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.html
    }
}

impl fmt::Display for HtmlLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(Number),
    Text(String),
    // Must precede the wrappers, which also deserialize from a one-element
    // sequence
    List(Vec<Value>),
    Raw(Raw),
    Html(HtmlLabel),
}

impl Value {
    /// Natural textual form. Lists join their items with `,`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
            Value::Raw(raw) => raw.content().to_string(),
            Value::Html(html) => html.content().to_string(),
            Value::List(items) => items
                .iter()
                .map(Value::to_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Interpret the value as a list of names.
    ///
    /// A single name, a comma-separated string and a list (of either) are
    /// all accepted. Blank entries are dropped.
    pub fn names(&self) -> Vec<String> {
        match self {
            Value::Text(s) => s
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            Value::List(items) => items.iter().flat_map(Value::names).collect(),
            other => vec![other.to_text()],
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value.into())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value.into())
    }
}

impl From<f64> for Value {
    /// Non-finite numbers have no JSON form and fall back to their text.
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or_else(|| Value::Text(value.to_string()))
    }
}

impl From<Raw> for Value {
    fn from(value: Raw) -> Self {
        Value::Raw(value)
    }
}

impl From<HtmlLabel> for Value {
    fn from(value: HtmlLabel) -> Self {
        Value::Html(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// One end of an edge chain: a node, or a node with a port.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Node(Value),
    Port(Value, Value),
}

impl From<Value> for Endpoint {
    fn from(value: Value) -> Self {
        Endpoint::Node(value)
    }
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        Endpoint::Node(value.into())
    }
}

impl From<String> for Endpoint {
    fn from(value: String) -> Self {
        Endpoint::Node(value.into())
    }
}

impl From<&String> for Endpoint {
    fn from(value: &String) -> Self {
        Endpoint::Node(value.into())
    }
}

impl From<(&str, &str)> for Endpoint {
    fn from((node, port): (&str, &str)) -> Self {
        Endpoint::Port(node.into(), port.into())
    }
}
