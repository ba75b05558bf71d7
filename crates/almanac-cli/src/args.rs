//! Command-line argument definitions for the Almanac CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output format for the generated outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Nested Markdown bullet list of anchor links.
    Markdown,
    /// JSON array of title/anchor/depth objects.
    Json,
}

/// Command-line arguments for the Almanac outline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Paths to the input catalog markdown files, merged in order
    #[arg(required = true, help = "Paths to the input files")]
    pub inputs: Vec<String>,

    /// Path to the output file
    #[arg(short, long, default_value = "toc.md")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
