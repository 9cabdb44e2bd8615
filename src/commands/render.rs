//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::JsonGraphError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, JsonGraphError> {
        match command {
            Commands::Render {
                inputs,
                format,
                engine,
                output_dir,
                embed_css,
                engine_args,
            } => RenderConfig::builder()
                .with_inputs(inputs.resolve_paths()?)
                .with_format(format)
                .with_engine(engine)
                .with_output_dir(output_dir)
                .with_embed_css(embed_css)
                .with_engine_args(engine_args)
                .build(),
            _ => Err(JsonGraphError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for laying out graphs
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
