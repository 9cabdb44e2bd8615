//! Dot command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::JsonGraphError;

/// Configuration for the dot command
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Graph description files to import
    pub inputs: Vec<PathBuf>,
    /// File to write DOT text to (stdout if None)
    pub output: Option<PathBuf>,
}

impl DotConfig {
    pub fn builder() -> DotConfigBuilder {
        DotConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DotConfigBuilder {
    inputs: Option<Vec<PathBuf>>,
    output: Option<Option<PathBuf>>,
}

impl DotConfigBuilder {
    pub fn new() -> Self {
        Self {
            inputs: None,
            output: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for DotConfigBuilder {
    type Config = DotConfig;

    fn build(self) -> Result<Self::Config, JsonGraphError> {
        let inputs = self.inputs.ok_or_else(|| missing_field("inputs"))?;
        if inputs.is_empty() {
            return Err(JsonGraphError::ConfigurationError {
                message: "At least one input is required".to_string(),
            });
        }

        Ok(DotConfig {
            inputs,
            output: self.output.ok_or_else(|| missing_field("output"))?,
        })
    }
}
