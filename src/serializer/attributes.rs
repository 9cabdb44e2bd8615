//! Attribute-list rendering with style-reference expansion

use super::markup::rich_label;
use crate::escape::{quote_id, quote_text};
use crate::model::{
    AttrMap, Attributes, LABEL_KEY, STYLE_REF_KEY, StyleTable, TEXT_STYLE_KEY, Value,
};

/// Style tables visible at the current nesting level, outermost first.
#[derive(Debug, Default)]
pub(crate) struct StyleScope<'a> {
    tables: Vec<&'a StyleTable>,
}

impl<'a> StyleScope<'a> {
    pub(crate) fn enter(&mut self, table: &'a StyleTable) {
        self.tables.push(table);
    }

    pub(crate) fn leave(&mut self) {
        self.tables.pop();
    }

    /// Innermost definition of `name`
    fn lookup(&self, name: &str) -> Option<&'a AttrMap> {
        self.tables
            .iter()
            .rev()
            .copied()
            .find_map(|table| table.get(name))
    }

    /// `" [k=v, ...]"`, or an empty string when nothing renders.
    ///
    /// `label_fallback` is the declared name used as the body of a rich
    /// label that has no explicit `label`.
    pub(crate) fn attribute_list(
        &self,
        attrs: &Attributes,
        label_fallback: Option<&str>,
    ) -> String {
        let mut expanding = Vec::new();
        let body = match attrs {
            Attributes::Map(map) => self.pairs(map, label_fallback, &mut expanding, false),
            Attributes::Styles(styles) => self.style_refs(styles, &mut expanding),
        };

        if body.is_empty() {
            String::new()
        } else {
            format!(" [{body}]")
        }
    }

    fn pairs(
        &self,
        map: &AttrMap,
        label_fallback: Option<&str>,
        expanding: &mut Vec<String>,
        nested: bool,
    ) -> String {
        let rich = if nested {
            None
        } else {
            map.get(TEXT_STYLE_KEY)
                .and_then(|styles| rich_label(styles, map.get(LABEL_KEY), label_fallback))
        };

        let mut fragments = Vec::with_capacity(map.len());
        for (key, value) in map {
            let fragment = match key.as_str() {
                STYLE_REF_KEY => self.style_refs(value, expanding),
                TEXT_STYLE_KEY => match &rich {
                    Some(label) => format!("{LABEL_KEY}={label}"),
                    None => String::new(),
                },
                LABEL_KEY if rich.is_some() => String::new(),
                _ => format!("{}={}", quote_text(key), quote_id(value)),
            };

            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }

        fragments.join(", ")
    }

    /// Union of the referenced styles. Unknown names and names already being
    /// expanded contribute nothing.
    fn style_refs(&self, styles: &Value, expanding: &mut Vec<String>) -> String {
        let mut fragments = Vec::new();

        for name in styles.names() {
            if expanding.contains(&name) {
                continue;
            }
            let Some(style) = self.lookup(&name) else {
                continue;
            };

            expanding.push(name);
            let fragment = self.pairs(style, None, expanding, true);
            expanding.pop();

            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }

        fragments.join(", ")
    }
}
