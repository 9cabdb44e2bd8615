//! DOT identifier escaping
//!
//! Every identifier or attribute value written into DOT output goes through
//! [`quote_id`] exactly once. Plain scalars come out as double-quoted,
//! escaped literals; the two wrapper kinds bypass quoting:
//!
//! - [`Raw`](crate::model::Raw) is written verbatim
//! - [`HtmlLabel`](crate::model::HtmlLabel) is wrapped in `<...>`

use crate::model::Value;

/// Quote character used by [`escape_string`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// Backslash-escape `\`, carriage return, newline and the chosen quote
/// character.
pub fn escape_string(s: &str, quote: Quote) -> String {
    let quote = quote.as_char();
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }

    out
}

/// Replace `&`, `<`, `>`, `"` and `'` with their named entities.
///
/// Works in a single pass, so an `&` produced by one substitution is never
/// escaped again.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }

    out
}

/// Turn a value into a DOT identifier token.
pub fn quote_id(value: &Value) -> String {
    match value {
        Value::Raw(raw) => raw.content().to_string(),
        Value::Html(html) => format!("<{}>", html.content()),
        other => quote_text(&other.to_text()),
    }
}

/// Quote plain text as a DOT string literal.
pub fn quote_text(text: &str) -> String {
    format!("\"{}\"", escape_html(&escape_string(text, Quote::Double)))
}
