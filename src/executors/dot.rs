//! Dot command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::DotConfig;
use crate::executors::CommandExecutor;
use crate::model::GraphDocument;

pub struct DotExecutor;

impl CommandExecutor for DotExecutor {
    type Config = DotConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut documents = Vec::with_capacity(config.inputs.len());
        for input in &config.inputs {
            let document = GraphDocument::import_file(input)
                .wrap_err_with(|| format!("Failed to import '{}'", input.display()))?;
            documents.push(document);
        }

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        write_documents(&documents, output_writer.as_mut())
            .into_diagnostic()
            .wrap_err("Failed to write DOT output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} DOT written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

/// Write each document's DOT text, separated by blank lines.
pub fn write_documents(documents: &[GraphDocument], output: &mut dyn Write) -> io::Result<()> {
    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        writeln!(output, "{}", document.dot())?;
    }
    output.flush()
}
