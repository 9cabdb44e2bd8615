//! Render command configuration

use std::path::{Path, PathBuf};

use crate::common::missing_field;
use crate::error::JsonGraphError;
use crate::layout::LayoutOptions;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Graph description files to import
    pub inputs: Vec<PathBuf>,
    /// Output format requested from the layout program
    pub format: String,
    /// Graphviz layout program
    pub engine: String,
    /// Directory for rendered files (next to each input if None)
    pub output_dir: Option<PathBuf>,
    /// Inject the document's CSS into SVG output
    pub embed_css: bool,
    /// Extra arguments for the layout program
    pub engine_args: Vec<String>,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            format: self.format.clone(),
            args: self.engine_args.clone(),
        }
    }

    /// Where the rendered form of `input` is saved
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let file_name = match input.file_stem() {
            Some(stem) => format!("{}.{}", stem.to_string_lossy(), self.format),
            None => format!("graph.{}", self.format),
        };

        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => input.with_file_name(file_name),
        }
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    inputs: Option<Vec<PathBuf>>,
    format: Option<String>,
    engine: Option<String>,
    output_dir: Option<Option<PathBuf>>,
    embed_css: Option<bool>,
    engine_args: Option<Vec<String>>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            inputs: None,
            format: None,
            engine: None,
            output_dir: None,
            embed_css: None,
            engine_args: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn with_format(mut self, format: String) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_engine(mut self, engine: String) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    pub fn with_embed_css(mut self, embed_css: bool) -> Self {
        self.embed_css = Some(embed_css);
        self
    }

    pub fn with_engine_args(mut self, engine_args: Vec<String>) -> Self {
        self.engine_args = Some(engine_args);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, JsonGraphError> {
        let inputs = self.inputs.ok_or_else(|| missing_field("inputs"))?;
        if inputs.is_empty() {
            return Err(JsonGraphError::ConfigurationError {
                message: "At least one input is required".to_string(),
            });
        }

        let format = self.format.ok_or_else(|| missing_field("format"))?;
        if format.is_empty() {
            return Err(JsonGraphError::ConfigurationError {
                message: "Output format must not be empty".to_string(),
            });
        }

        Ok(RenderConfig {
            inputs,
            format,
            engine: self.engine.ok_or_else(|| missing_field("engine"))?,
            output_dir: self.output_dir.ok_or_else(|| missing_field("output_dir"))?,
            embed_css: self.embed_css.ok_or_else(|| missing_field("embed_css"))?,
            engine_args: self.engine_args.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn config(output_dir: Option<PathBuf>) -> RenderConfig {
        RenderConfig::builder()
            .with_inputs(vec![PathBuf::from("graphs/flow.json")])
            .with_format("svg".to_string())
            .with_engine("dot".to_string())
            .with_output_dir(output_dir)
            .with_embed_css(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_output_path_next_to_input() {
        assert_eq!(
            config(None).output_path(Path::new("graphs/flow.json")),
            PathBuf::from("graphs/flow.svg")
        );
    }

    #[test]
    fn test_output_path_in_output_dir() {
        assert_eq!(
            config(Some(PathBuf::from("out"))).output_path(Path::new("graphs/flow.json")),
            PathBuf::from("out/flow.svg")
        );
    }

    #[test]
    fn test_engine_args_default_to_empty() {
        assert!(config(None).layout_options().args.is_empty());
    }

    #[test]
    fn test_empty_format_rejected() {
        let result = RenderConfig::builder()
            .with_inputs(vec![PathBuf::from("a.json")])
            .with_format(String::new())
            .with_engine("dot".to_string())
            .with_output_dir(None)
            .with_embed_css(false)
            .build();

        assert!(result.is_err());
    }
}
