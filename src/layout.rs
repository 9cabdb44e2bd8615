//! # Layout engine boundary
//!
//! DOT text is handed to a [`LayoutEngine`]; its output is wrapped in a
//! [`RenderedOutput`] that can be saved. [`GraphvizCommand`] runs a
//! Graphviz program (`dot`, `neato`, ...) as a child process.
//!
//! Engine output is kept as bytes so binary formats such as `png` survive
//! unchanged.

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use crate::constants::layout::{DEFAULT_ENGINE, DEFAULT_FORMAT};
use crate::error::JsonGraphError;
use crate::model::GraphDocument;

pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Options passed through to the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Output format, e.g. `svg` or `png`
    pub format: String,
    /// Extra engine arguments
    pub args: Vec<String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            args: Vec::new(),
        }
    }
}

impl LayoutOptions {
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Turns DOT text into rendered output.
pub trait LayoutEngine {
    fn layout(&self, dot: &str, options: &LayoutOptions) -> Result<Vec<u8>, EngineError>;
}

/// A Graphviz layout program invoked as `<program> -T<format> [args...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizCommand {
    program: String,
}

impl Default for GraphvizCommand {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE)
    }
}

impl GraphvizCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl LayoutEngine for GraphvizCommand {
    fn layout(&self, dot: &str, options: &LayoutOptions) -> Result<Vec<u8>, EngineError> {
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", options.format))
            .args(&options.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to start '{}': {e}", self.program))?;

        // stdin is fed from its own thread while stdout and stderr drain
        let stdin = child.stdin.take();
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(dot.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (output, writer.join())
        });

        let output = output?;
        if !output.status.success() {
            return Err(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )
            .into());
        }

        match written {
            Ok(result) => result?,
            Err(_) => return Err(format!("writing DOT to '{}' panicked", self.program).into()),
        }

        Ok(output.stdout)
    }
}

/// Output produced by a layout engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    bytes: Vec<u8>,
}

impl RenderedOutput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The output as text; invalid UTF-8 (binary formats) is replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Insert a `<style>` element right after the opening `<svg ...>` tag.
    ///
    /// Output that is not SVG, or empty CSS, is returned unchanged.
    pub fn embed_css(mut self, css: &str) -> Self {
        if css.trim().is_empty() {
            return self;
        }
        let Ok(text) = std::str::from_utf8(&self.bytes) else {
            return self;
        };

        let insert_at = text
            .find("<svg")
            .and_then(|start| text[start..].find('>').map(|end| start + end + 1));

        if let Some(position) = insert_at {
            let style = format!("\n<style type=\"text/css\">\n{css}\n</style>");
            self.bytes.splice(position..position, style.into_bytes());
        }

        self
    }

    /// Write the output to `path`, blocking until done.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<&Self, JsonGraphError> {
        write_file(path.as_ref(), &self.bytes)?;
        Ok(self)
    }

    /// Write the output to `path` on a background thread.
    pub fn save_in_background(
        &self,
        path: impl Into<PathBuf>,
    ) -> JoinHandle<Result<(), JsonGraphError>> {
        let path = path.into();
        let bytes = self.bytes.clone();
        thread::spawn(move || write_file(&path, &bytes))
    }
}

impl std::fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), JsonGraphError> {
    std::fs::write(path, bytes).map_err(|source| JsonGraphError::FileWriteError {
        path: path.to_path_buf(),
        source,
    })
}

impl GraphDocument {
    /// Lay out this document's DOT text with `engine`.
    ///
    /// Engine failures become [`JsonGraphError::LayoutError`] carrying the
    /// DOT source.
    pub fn generate(
        &self,
        engine: &dyn LayoutEngine,
        options: &LayoutOptions,
    ) -> Result<RenderedOutput, JsonGraphError> {
        let dot = self.dot();
        engine
            .layout(dot, options)
            .map(RenderedOutput::new)
            .map_err(|e| JsonGraphError::LayoutError {
                dot: dot.to_string(),
                detail: e.to_string(),
            })
    }

    /// Import a document (inline JSON or a path) and lay it out.
    pub fn generate_from(
        source: &str,
        engine: &dyn LayoutEngine,
        options: &LayoutOptions,
    ) -> Result<RenderedOutput, JsonGraphError> {
        Self::import(source)?.generate(engine, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl LayoutEngine for Echo {
        fn layout(&self, dot: &str, options: &LayoutOptions) -> Result<Vec<u8>, EngineError> {
            Ok(format!("<svg format=\"{}\">{}</svg>", options.format, dot.len()).into_bytes())
        }
    }

    struct Broken;

    impl LayoutEngine for Broken {
        fn layout(&self, _dot: &str, _options: &LayoutOptions) -> Result<Vec<u8>, EngineError> {
            Err("syntax error in line 3".into())
        }
    }

    #[test]
    fn test_generate_wraps_engine_output() {
        let document = GraphDocument::default();
        let output = document
            .generate(&Echo, &LayoutOptions::default())
            .unwrap();

        assert_eq!(
            output.text(),
            format!("<svg format=\"svg\">{}</svg>", document.dot().len())
        );
    }

    #[test]
    fn test_generate_failure_embeds_dot() {
        let document = GraphDocument::default().with_name("broken");
        let error = document
            .generate(&Broken, &LayoutOptions::default())
            .unwrap_err();

        match error {
            JsonGraphError::LayoutError { dot, detail } => {
                assert_eq!(dot, document.dot());
                assert_eq!(detail, "syntax error in line 3");
            }
            other => panic!("Expected LayoutError, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_from_inline_json() {
        let output = GraphDocument::generate_from(
            r#"{"type": "graph"}"#,
            &Echo,
            &LayoutOptions::default().with_format("png"),
        )
        .unwrap();
        assert!(output.text().starts_with("<svg format=\"png\">"));
    }

    #[test]
    fn test_embed_css() {
        let output = RenderedOutput::new("<?xml?>\n<svg width=\"1\">\n<g/>\n</svg>")
            .embed_css("g {fill: red;}");
        assert_eq!(
            output.text(),
            "<?xml?>\n<svg width=\"1\">\n\
             <style type=\"text/css\">\ng {fill: red;}\n</style>\n\
             <g/>\n</svg>"
        );

        let plain = RenderedOutput::new("digraph {}").embed_css("g {}");
        assert_eq!(plain.text(), "digraph {}");

        let untouched = RenderedOutput::new("<svg></svg>").embed_css("  ");
        assert_eq!(untouched.text(), "<svg></svg>");
    }

    #[test]
    fn test_binary_output_is_kept_as_bytes() {
        let output = RenderedOutput::new(vec![0x89, b'P', b'N', b'G']);
        assert_eq!(output.as_bytes(), &[0x89, b'P', b'N', b'G']);

        let unchanged = output.clone().embed_css("g {fill: red;}");
        assert_eq!(unchanged, output);
    }

    #[cfg(unix)]
    fn engine_script(dir: &tempfile::TempDir, body: &str) -> GraphvizCommand {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("engine.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        GraphvizCommand::new(path.display().to_string())
    }

    #[cfg(unix)]
    #[test]
    fn test_command_returns_binary_stdout() {
        let dir = tempfile::TempDir::new().unwrap();
        let engine = engine_script(&dir, "cat > /dev/null\nprintf '\\211%s' \"$1\"");

        let bytes = engine
            .layout("digraph {}", &LayoutOptions::default().with_format("png"))
            .unwrap();

        assert_eq!(bytes, b"\x89-Tpng");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_reports_stderr_when_exiting_early() {
        let dir = tempfile::TempDir::new().unwrap();
        let engine = engine_script(&dir, "echo 'syntax error in line 1' >&2\nexit 1");
        let dot = "\"a\" -> \"b\";\n".repeat(100_000);

        let error = engine
            .layout(&dot, &LayoutOptions::default())
            .unwrap_err();

        assert!(
            error.to_string().contains("syntax error in line 1"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let engine = GraphvizCommand::new("jsongraph-no-such-layout-program");
        let error = engine
            .layout("digraph {}", &LayoutOptions::default())
            .unwrap_err();
        assert!(error.to_string().contains("failed to start"));
    }
}
