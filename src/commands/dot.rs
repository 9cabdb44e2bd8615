//! Dot command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DotConfig;
use crate::error::JsonGraphError;

impl FromCommand for DotConfig {
    fn from_command(command: Commands) -> Result<Self, JsonGraphError> {
        match command {
            Commands::Dot { inputs, output } => DotConfig::builder()
                .with_inputs(inputs.resolve_paths()?)
                .with_output(output)
                .build(),
            _ => Err(JsonGraphError::ConfigurationError {
                message: "Invalid command type for DotConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DotConfig);

/// Execute the dot command for printing DOT text
pub fn execute_dot_command(command: Commands) -> Result<()> {
    let config =
        DotConfig::from_command(command).wrap_err("Failed to parse dot command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::dot::DotExecutor;
    DotExecutor::execute(config)
}
