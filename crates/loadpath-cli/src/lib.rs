//! CLI logic for the Loadpath dependency graph tool.
//!
//! This module reads a JSON model, builds its dependency graph and writes
//! the result as JSON or DOT.

pub mod error_adapter;
pub mod model;

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use error_adapter::CliError;

use std::fs;

use log::info;

use loadpath::{ElementCache, GraphBuilder, host::BoxKernel};

use model::{ColorRecorder, GraphDocument};

/// Run the Loadpath CLI application
///
/// This function builds the dependency graph of the input model and writes
/// it to the output file in the requested format.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed models
/// - Graph construction errors, such as duplicate ids or support cycles
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:% = args.format;
        "Processing model"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let elements = model::load_model(&args.input)?;

    let builder = GraphBuilder::new(app_config.graph().clone());
    let mut cache = ElementCache::new();
    let mut recorder = ColorRecorder::default();
    let graph = builder.build_and_paint(&mut cache, &elements, &BoxKernel, &mut recorder)?;

    let output = match args.format {
        OutputFormat::Json => GraphDocument::new(&graph, &recorder).to_json()?,
        OutputFormat::Dot => builder.to_dot(&cache)?,
    };
    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Graph exported successfully");

    Ok(())
}
