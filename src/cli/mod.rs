//! CLI argument parsing for cardpress.
//!
//! Uses clap derive macros for declarative argument definitions. Flag names
//! keep the underscore form (`--svg_file`) for compatibility with existing
//! wrapper scripts around the original tool.

use clap::Parser;
use std::path::PathBuf;

/// Cardpress: batch card/label generator.
///
/// For each line in the text file, the placeholder text in the template SVG
/// is replaced with that line, the result is written to a temporary
/// workspace, and the external renderer converts it into a numbered PNG or
/// PDF in the output directory.
#[derive(Parser, Debug)]
#[command(name = "cardpress")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source SVG template file.
    #[arg(long = "svg_file", value_name = "FILE")]
    pub svg_file: PathBuf,

    /// Text file containing replacement text, one line per output card.
    #[arg(long = "text_file", value_name = "FILE")]
    pub text_file: PathBuf,

    /// Type of file output (png or pdf, case-insensitive).
    #[arg(long = "file_type", default_value = "png")]
    pub file_type: String,

    /// Directory to create output file(s) in.
    #[arg(long = "output_path", value_name = "DIR", default_value = ".")]
    pub output_path: PathBuf,

    /// Integer to start numbering output files from.
    #[arg(long = "increment_from", default_value_t = 1)]
    pub increment_from: u32,

    /// DPI of output files.
    #[arg(long = "output_dpi", default_value_t = 300)]
    pub output_dpi: u32,

    /// Renderer binary to invoke for SVG conversion.
    #[arg(long, default_value = "inkscape")]
    pub renderer: String,

    /// Enable debug logging.
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments, exiting with a usage message on error.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
