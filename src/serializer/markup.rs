//! Rich-text labels built from `textstyle` tags

use crate::escape::{escape_html, quote_id};
use crate::model::{HtmlLabel, Value};

/// HTML-like tag for a text-style name, if it is one we know.
fn html_tag(style: &str) -> Option<&'static str> {
    match style.to_ascii_lowercase().as_str() {
        "italic" | "i" => Some("i"),
        "bold" | "b" => Some("b"),
        "underline" | "u" => Some("u"),
        "stoke" | "strike" | "s" => Some("s"),
        _ => None,
    }
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

/// Wrap a label in the tags named by `styles`, first tag outermost.
///
/// The label body is `label` when given, else `fallback` (a declared node
/// name). Returns `None` when no known tag is named, in which case the
/// label is left to normal attribute rendering.
pub(crate) fn rich_label(
    styles: &Value,
    label: Option<&Value>,
    fallback: Option<&str>,
) -> Option<String> {
    let tags: Vec<&str> = styles
        .names()
        .iter()
        .filter_map(|style| html_tag(style))
        .collect();

    if tags.is_empty() {
        return None;
    }

    let body = match label {
        Some(Value::Html(html)) => html.content().to_string(),
        Some(Value::Raw(raw)) => raw.content().to_string(),
        Some(value) => escape_html(strip_quotes(&value.to_text())),
        None => escape_html(strip_quotes(fallback.unwrap_or_default())),
    };

    let open: String = tags.iter().map(|tag| format!("<{tag}>")).collect();
    let close: String = tags.iter().rev().map(|tag| format!("</{tag}>")).collect();

    Some(quote_id(&Value::Html(HtmlLabel::new(format!(
        "{open}{body}{close}"
    )))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tag_is_outermost() {
        let label = rich_label(
            &Value::from(vec!["bold", "italic"]),
            Some(&Value::from("Shape")),
            None,
        );
        assert_eq!(label.as_deref(), Some("<<b><i>Shape</i></b>>"));
    }

    #[test]
    fn test_aliases_and_comma_string() {
        let label = rich_label(&Value::from("u, stoke"), Some(&Value::from("x")), None);
        assert_eq!(label.as_deref(), Some("<<u><s>x</s></u>>"));
    }

    #[test]
    fn test_body_is_html_escaped_and_unquoted() {
        let label = rich_label(&Value::from("b"), None, Some("\"a<b\""));
        assert_eq!(label.as_deref(), Some("<<b>a&lt;b</b>>"));
    }

    #[test]
    fn test_html_label_body_is_kept() {
        let label = rich_label(
            &Value::from("i"),
            Some(&Value::Html(HtmlLabel::new("x<br/>y"))),
            None,
        );
        assert_eq!(label.as_deref(), Some("<<i>x<br/>y</i>>"));
    }

    #[test]
    fn test_unknown_or_empty_styles() {
        assert_eq!(rich_label(&Value::List(vec![]), None, Some("a")), None);
        assert_eq!(rich_label(&Value::from("blink"), None, Some("a")), None);
    }
}
