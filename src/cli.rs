use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::InputArgs;

#[derive(Parser)]
#[command(
    name = "jsongraph",
    about = "Turn JSON graph descriptions into Graphviz DOT and rendered diagrams",
    long_about = "jsongraph reads graph descriptions written in JSON (nodes, edges, subgraphs, \
                  named styles and rich-text labels) and turns them into Graphviz DOT text. It \
                  can also hand the DOT text to a Graphviz layout program and save the rendered \
                  result.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the DOT text for each graph description
    #[command(
        long_about = "Import each JSON graph description and write its DOT text. With a single \
                      input and no --output the text goes to stdout; with --output all documents \
                      are written to that file, separated by blank lines."
    )]
    Dot {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "JSONGRAPH_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Lay out each graph description and save the rendered result
    #[command(
        long_about = "Import each JSON graph description, run its DOT text through a Graphviz \
                      layout program and save the output next to the input (or in --output-dir) \
                      as <name>.<format>. Inputs are rendered in parallel."
    )]
    Render {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format passed to the layout program
        #[arg(
            short,
            long,
            default_value = crate::constants::layout::DEFAULT_FORMAT,
            env = "JSONGRAPH_FORMAT"
        )]
        format: String,

        /// Graphviz layout program to run
        #[arg(
            short,
            long,
            default_value = crate::constants::layout::DEFAULT_ENGINE,
            env = "JSONGRAPH_ENGINE"
        )]
        engine: String,

        /// Directory for rendered files (next to each input if not specified)
        #[arg(long, env = "JSONGRAPH_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Embed the document's CSS rules into SVG output
        #[arg(long, env = "JSONGRAPH_EMBED_CSS")]
        embed_css: bool,

        /// Extra arguments passed to the layout program
        #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
        engine_args: Vec<String>,
    },
}
