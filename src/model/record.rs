//! Graphviz `record` labels
//!
//! Fields are written `<port> text`, groups are wrapped in braces, and
//! siblings are separated by ` | `.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// A single field. Text starting with `<` is taken as ready-made markup.
    Text(String),
    /// A nested, brace-delimited group of fields
    Group(Vec<Field>),
}

impl Field {
    pub fn group<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Field::Group(fields.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Field::Text(text.to_string())
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Field::Text(text)
    }
}

impl From<Vec<Field>> for Field {
    fn from(fields: Vec<Field>) -> Self {
        Field::Group(fields)
    }
}

/// Record label for a list of top-level fields.
pub fn record_label(fields: &[Field]) -> String {
    fields
        .iter()
        .map(field_label)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn field_label(field: &Field) -> String {
    match field {
        Field::Text(text) if text.starts_with('<') => text.clone(),
        Field::Text(text) => format!("<{}> {}", port_name(text), text),
        Field::Group(fields) => format!("{{{}}}", record_label(fields)),
    }
}

// Ports are referenced from edges as `"node":"port"`, so keep them to word
// characters.
fn port_name(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_fields() {
        let fields = [Field::from("a"), Field::group(["b", "c"])];
        assert_eq!(record_label(&fields), "<a> a | {<b> b | <c> c}");
    }

    #[test]
    fn test_markup_passes_through() {
        let fields = [Field::from("<in> input"), Field::from("value")];
        assert_eq!(record_label(&fields), "<in> input | <value> value");
    }

    #[test]
    fn test_port_name_is_sanitized() {
        assert_eq!(record_label(&[Field::from("x y")]), "<x_y> x y");
    }

    #[test]
    fn test_deeply_nested_groups() {
        let fields = [Field::group([Field::from("a"), Field::group(["b"])])];
        assert_eq!(record_label(&fields), "{<a> a | {<b> b}}");
    }

    #[test]
    fn test_fields_from_json() {
        let fields: Vec<Field> = serde_json::from_str(r#"["a", ["b", "c"]]"#).unwrap();
        assert_eq!(record_label(&fields), "<a> a | {<b> b | <c> c}");
    }
}
