//! CSS rules attached to a document
//!
//! Rules are carried with the document (and round-trip through JSON) so
//! rendered SVG output can be styled after layout, see
//! [`RenderedOutput::embed_css`](crate::layout::RenderedOutput::embed_css).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{GraphDocument, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    One(String),
    Many(Vec<String>),
}

impl Selector {
    fn joined(&self) -> String {
        match self {
            Selector::One(selector) => selector.clone(),
            Selector::Many(selectors) => selectors.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRule {
    pub select: Selector,
    #[serde(default)]
    pub style: IndexMap<String, Value>,
}

impl CssRule {
    pub fn new(select: impl Into<String>) -> Self {
        Self {
            select: Selector::One(select.into()),
            style: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// `selector {prop: value; ...}`
    pub fn to_css(&self) -> String {
        let body: String = self
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {};", value.to_text()))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{} {{{body}}}", self.select.joined())
    }
}

impl GraphDocument {
    /// Stylesheet assembled from this document's CSS rules, one rule per
    /// line.
    pub fn css_text(&self) -> String {
        self.css
            .iter()
            .map(CssRule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
