//! The cardpress pipeline: load, substitute, render, clean up.
//!
//! Strictly sequential: the template and the replacement lines are loaded
//! before the workspace exists, every line is substituted and written before
//! any rendering starts, and every render invocation completes before the
//! workspace is dropped. Any early return drops the workspace too, so the
//! temp directory never outlives a run.

use crate::cli::Cli;
use crate::error::{CardpressError, Result};
use crate::lines;
use crate::render::{OutputFormat, Renderer};
use crate::template::Template;
use crate::workspace::Workspace;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of replacement lines read.
    pub lines: usize,
    /// Number of artifacts successfully rendered.
    pub rendered: usize,
    /// Rendered artifact paths, in input-line order.
    pub outputs: Vec<PathBuf>,
}

/// Run the full pipeline for the given CLI options.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let template = Template::load(&cli.svg_file)?;
    let replacement_lines = lines::read_lines(&cli.text_file)?;

    let mut workspace = Workspace::new()?;
    info!("workspace is {}", workspace.path().display());
    if let Some(placeholder) = template.target_text() {
        debug!("replacing template text {:?}", placeholder);
    }

    // Substitute every line and write the intermediate files.
    let width = pad_width(cli.increment_from, replacement_lines.len());
    let mut counter = cli.increment_from;
    for line in &replacement_lines {
        let svg = template.substitute(line)?;
        let name = format!("{:0width$}.svg", counter, width = width);
        let path = workspace.write_file(&name, &svg)?;
        debug!("wrote {}", path.display());
        counter += 1;
    }

    // An unrecognized output format skips rendering without failing the run.
    let Some(format) = OutputFormat::parse(&cli.file_type) else {
        error!("unsupported file type: {}", cli.file_type);
        return Ok(RunSummary {
            lines: replacement_lines.len(),
            rendered: 0,
            outputs: Vec::new(),
        });
    };

    if !workspace.files().is_empty() {
        std::fs::create_dir_all(&cli.output_path).map_err(|e| {
            CardpressError::Io(format!(
                "failed to create output directory '{}': {}",
                cli.output_path.display(),
                e
            ))
        })?;
    }

    // Render in creation order. A failed file does not stop the batch, but
    // any failure makes the run fail once the rest have been attempted.
    let renderer = Renderer::new(&cli.renderer);
    let mut outputs = Vec::new();
    let mut failures = Vec::new();
    for file in workspace.files() {
        match renderer.render(file, &cli.output_path, format, cli.output_dpi) {
            Ok(artifact) => {
                debug!("rendered {}", artifact.display());
                outputs.push(artifact);
            }
            Err(e) => {
                error!("{}", e);
                failures.push(e);
            }
        }
    }

    if let Some(first) = failures.first() {
        return Err(CardpressError::RenderInvocation(format!(
            "{} of {} invocation(s) failed; first failure: {}",
            failures.len(),
            workspace.files().len(),
            first
        )));
    }

    Ok(RunSummary {
        lines: replacement_lines.len(),
        rendered: outputs.len(),
        outputs,
    })
}

/// Zero-padding width for intermediate file names.
///
/// At least 3 digits to match the historical `005.svg` shape, widened when
/// the final counter value needs more so large batches never collide.
fn pad_width(start: u32, count: usize) -> usize {
    if count == 0 {
        return 3;
    }
    let last = u64::from(start) + count as u64 - 1;
    let mut digits = 1;
    let mut value = last;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits.max(3)
}
