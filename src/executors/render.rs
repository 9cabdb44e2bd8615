//! Render command executor

use std::path::{Path, PathBuf};

use console::style;
use miette::Result;
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::error::JsonGraphError;
use crate::executors::CommandExecutor;
use crate::layout::{GraphvizCommand, LayoutEngine};
use crate::model::GraphDocument;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} with {} ({})...",
            style("📊").cyan(),
            graph_count(config.inputs.len()),
            style(&config.engine).bold(),
            config.format
        );

        let engine = GraphvizCommand::new(config.engine.clone());
        let results = render_all(&config, &engine);

        let mut first_error = None;
        for (input, result) in results {
            match result {
                Ok(output_path) => eprintln!(
                    "{} {} → {}",
                    style("✓").green(),
                    input.display(),
                    style(output_path.display()).bold()
                ),
                Err(error) => {
                    eprintln!("{} {}: {}", style("✗").red(), input.display(), error);
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

fn graph_count(count: usize) -> String {
    match count {
        1 => "1 graph".to_string(),
        n => format!("{n} graphs"),
    }
}

/// Render every input in parallel, keeping input order in the results.
pub fn render_all<E>(
    config: &RenderConfig,
    engine: &E,
) -> Vec<(PathBuf, Result<PathBuf, JsonGraphError>)>
where
    E: LayoutEngine + Sync,
{
    config
        .inputs
        .par_iter()
        .map(|input| (input.clone(), render_one(config, engine, input)))
        .collect()
}

fn render_one(
    config: &RenderConfig,
    engine: &dyn LayoutEngine,
    input: &Path,
) -> Result<PathBuf, JsonGraphError> {
    let document = GraphDocument::import_file(input)?;
    let mut rendered = document.generate(engine, &config.layout_options())?;

    if config.embed_css {
        rendered = rendered.embed_css(&document.css_text());
    }

    let output_path = config.output_path(input);
    rendered.save(&output_path)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::layout::{EngineError, LayoutOptions};

    struct Fake;

    impl LayoutEngine for Fake {
        fn layout(&self, dot: &str, options: &LayoutOptions) -> Result<Vec<u8>, EngineError> {
            if dot.contains("fail") {
                return Err("bad graph".into());
            }
            Ok(format!("<svg>{}</svg>", options.format).into_bytes())
        }
    }

    #[test]
    fn test_graph_count() {
        assert_eq!(graph_count(0), "0 graphs");
        assert_eq!(graph_count(1), "1 graph");
        assert_eq!(graph_count(12), "12 graphs");
    }

    #[test]
    fn test_render_all() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        fs::write(
            &good,
            r#"{"css": [{"select": "g", "style": {"fill": "red"}}]}"#,
        )
        .unwrap();
        fs::write(&bad, r#"{"name": "fail"}"#).unwrap();

        let config = RenderConfig::builder()
            .with_inputs(vec![good.clone(), bad.clone()])
            .with_format("svg".to_string())
            .with_engine("fake".to_string())
            .with_output_dir(None)
            .with_embed_css(true)
            .build()
            .unwrap();

        let results = render_all(&config, &Fake);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, good);
        let written = results[0].1.as_ref().unwrap();
        assert_eq!(written, &temp_dir.path().join("good.svg"));
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "<svg>\n<style type=\"text/css\">\ng {fill: red;}\n</style>svg</svg>"
        );

        assert!(matches!(
            results[1].1,
            Err(JsonGraphError::LayoutError { .. })
        ));
    }
}
