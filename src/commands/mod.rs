//! Command implementations for the jsongraph CLI
//!
//! - dot: print the DOT text of graph descriptions
//! - render: lay out graph descriptions and save the results

pub mod dot;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Dot { .. } => dot::execute_dot_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
