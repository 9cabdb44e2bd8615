//! Configuration constants for jsongraph
//!
//! Defaults used by the library and the command-line front end. Each CLI
//! default can be overridden with a flag or a `JSONGRAPH_*` environment
//! variable.

/// Layout engine configuration
pub mod layout {
    /// Graphviz program used when none is given
    pub const DEFAULT_ENGINE: &str = "dot";

    /// Output format requested from the engine when none is given
    pub const DEFAULT_FORMAT: &str = "svg";
}

/// Input discovery configuration
pub mod input {
    /// Extension of graph description files
    pub const JSON_EXTENSION: &str = "json";
}
