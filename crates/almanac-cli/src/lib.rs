//! CLI logic for the Almanac outline tool.
//!
//! This module contains the core CLI logic for the Almanac outline tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::info;

use almanac::{AlmanacError, CatalogBuilder, catalog::Catalog};

/// Run the Almanac CLI application
///
/// This function processes the input files through the Almanac pipeline
/// and writes the rendered outline to the output file. Multiple inputs are
/// parsed independently and merged in argument order.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AlmanacError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Outline generation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), AlmanacError> {
    info!(
        inputs = args.inputs.len(),
        output_path = args.output;
        "Processing catalog"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let builder = CatalogBuilder::new(app_config);

    // Read and parse each input, merging in argument order
    let mut catalog = Catalog::new();
    for input in &args.inputs {
        info!(input_path = input; "Loading input file");
        let source = fs::read_to_string(input)?;
        catalog.merge(builder.load(&source)?);
    }

    // Generate the outline and render it
    let outline = builder.outline(&catalog)?;
    let rendered = match args.format {
        Format::Markdown => builder.render_markdown(&outline),
        Format::Json => builder.render_json(&outline)?,
    };

    // Write output file
    fs::write(&args.output, rendered)?;

    info!(output_file = args.output; "Outline exported successfully");

    Ok(())
}
