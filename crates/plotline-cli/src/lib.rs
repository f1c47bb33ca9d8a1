//! CLI logic for the Plotline trajectory renderer.
//!
//! Loads configuration, reads a plan file, renders it and writes the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use plotline::{PlotBuilder, PlotlineError};

/// Run the Plotline CLI application
///
/// This function processes the input plan through the Plotline pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PlotlineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Plan parsing and validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PlotlineError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing plan"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = PlotBuilder::new(app_config);
    let plan = builder.parse(&source)?;
    let svg = builder.render_svg(&plan)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
