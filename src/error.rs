use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON graph description in '{file}'")]
#[diagnostic(
    code(jsongraph::json_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

impl JsonParseError {
    /// Wrap a serde_json error, pointing the label at the reported line and
    /// column of `content`.
    pub fn new(file: &str, content: &str, source: serde_json::Error) -> Self {
        let span = byte_offset(content, source.line(), source.column())
            .map(|offset| SourceSpan::new(offset.into(), 1));

        Self {
            file: file.to_string(),
            source_code: NamedSource::new(file, content.to_string()),
            span,
            source,
        }
    }
}

// serde_json reports 1-based lines and columns; line 0 means "no position"
fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, text) in content.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            return Some(offset + column);
        }
        offset += text.len();
    }

    None
}

#[derive(Error, Debug, Diagnostic)]
pub enum JsonGraphError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(jsongraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    #[diagnostic(
        code(jsongraph::write_error),
        help("Check that the target directory exists and is writable")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(jsongraph::json_error),
        help("The graph description does not match the expected document shape")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(jsongraph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Layout engine failed: {detail}\n\nDOT source:\n{dot}")]
    #[diagnostic(
        code(jsongraph::layout_error),
        help("Check the generated DOT source above, or run it through the engine by hand")
    )]
    LayoutError { dot: String, detail: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(jsongraph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_json_parse_error_display() {
        let content = "{\n  \"name\": }";
        let json_err = serde_json::from_str::<serde_json::Value>(content).unwrap_err();

        let error = JsonParseError::new("graph.json", content, json_err);

        assert_eq!(
            error.to_string(),
            "Invalid JSON graph description in 'graph.json'"
        );
        let span = error.span.expect("span should be computed");
        // Second line starts at byte 2
        assert!(span.offset() >= 2 && span.offset() < content.len());
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("abc\ndef", 2, 2), Some(5));
        assert_eq!(byte_offset("abc", 0, 0), None);
        assert_eq!(byte_offset("abc", 4, 1), None);
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = JsonGraphError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_layout_error_embeds_dot() {
        let error = JsonGraphError::LayoutError {
            dot: "digraph {\n}".to_string(),
            detail: "syntax error in line 1".to_string(),
        };

        let error_str = error.to_string();
        assert!(error_str.contains("syntax error in line 1"));
        assert!(error_str.contains("digraph {\n}"));
    }

    #[test]
    fn test_configuration_error() {
        let error = JsonGraphError::ConfigurationError {
            message: "Unknown class 'Foo'".to_string(),
        };

        assert_eq!(error.to_string(), "Configuration error: Unknown class 'Foo'");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = JsonGraphError::FileWriteError {
            path: PathBuf::from("out.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: JsonGraphError = json_err.into();

        match error {
            JsonGraphError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
