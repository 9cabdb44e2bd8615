//! # Configuration Module
//!
//! Configuration structures for the jsongraph commands. Each command has
//! its own config module with a builder for easy construction.
//!
//! - **DotConfig**: Configuration for the `dot` command
//! - **RenderConfig**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use jsongraph::common::ConfigBuilder;
//! use jsongraph::config::RenderConfig;
//!
//! let config = RenderConfig::builder()
//!     .with_inputs(vec!["graph.json".into()])
//!     .with_format("png".to_string())
//!     .with_engine("neato".to_string())
//!     .with_output_dir(None)
//!     .with_embed_css(false)
//!     .with_engine_args(vec![])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.layout_options().format, "png");
//! ```

pub mod dot;
pub mod render;

pub use dot::DotConfig;
pub use render::RenderConfig;
