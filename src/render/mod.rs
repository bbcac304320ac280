//! External renderer invocation.
//!
//! Wraps the renderer binary (Inkscape by default) behind a small struct so
//! tests can point it at a stand-in executable. Every invocation is blocking
//! and exit-code-checked: the workspace holding the intermediate files is
//! deleted after the render phase, so nothing may still be reading from it
//! once this module returns.

use crate::error::{CardpressError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Recognized output formats and their renderer invocation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster image export (`-e`).
    Png,
    /// Document export (`-A`).
    Pdf,
}

impl OutputFormat {
    /// Parse a `--file_type` value, case-insensitively.
    ///
    /// Returns `None` for unrecognized values; the caller logs and skips
    /// rendering rather than failing the run.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("png") {
            Some(OutputFormat::Png)
        } else if value.eq_ignore_ascii_case("pdf") {
            Some(OutputFormat::Pdf)
        } else {
            None
        }
    }

    /// File extension of the rendered artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Renderer export flag selecting the invocation mode.
    fn export_flag(&self) -> &'static str {
        match self {
            OutputFormat::Png => "-e",
            OutputFormat::Pdf => "-A",
        }
    }
}

/// Handle on the external renderer binary.
pub struct Renderer {
    program: String,
}

impl Renderer {
    /// Create a renderer invoking the given program.
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Render one intermediate file into `output_dir`.
    ///
    /// The artifact keeps the intermediate file's base name and gains the
    /// format's extension. Waits for the renderer to finish; a launch failure
    /// or non-zero exit is a [`CardpressError::RenderInvocation`].
    ///
    /// Returns the path of the rendered artifact.
    pub fn render(
        &self,
        input: &Path,
        output_dir: &Path,
        format: OutputFormat,
        dpi: u32,
    ) -> Result<PathBuf> {
        let output = output_path(input, output_dir, format)?;
        let args = export_args(format, input, &output, dpi);

        let result = Command::new(&self.program).args(&args).output().map_err(|e| {
            CardpressError::RenderInvocation(format!(
                "failed to execute {}: {}",
                self.program, e
            ))
        })?;

        if result.status.success() {
            Ok(output)
        } else {
            let exit_code = result.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&result.stdout).trim().to_string();
            let error_msg = if stderr.is_empty() { stdout } else { stderr };

            Err(CardpressError::RenderInvocation(format!(
                "{} failed (exit code {}) rendering '{}': {}",
                self.program,
                exit_code,
                input.display(),
                error_msg
            )))
        }
    }
}

/// Artifact path: `<output_dir>/<base_name>.<ext>`.
fn output_path(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CardpressError::Io(format!(
                "intermediate file '{}' has no usable base name",
                input.display()
            ))
        })?;
    Ok(output_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Argument vector for one renderer invocation.
fn export_args(format: OutputFormat, input: &Path, output: &Path, dpi: u32) -> Vec<String> {
    vec![
        format.export_flag().to_string(),
        output.display().to_string(),
        input.display().to_string(),
        format!("--export-dpi={}", dpi),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(OutputFormat::parse("png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::parse("PNG"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::parse("Pdf"), Some(OutputFormat::Pdf));
        assert_eq!(OutputFormat::parse("pdf"), Some(OutputFormat::Pdf));
    }

    #[test]
    fn parse_rejects_unknown_formats() {
        assert_eq!(OutputFormat::parse("bmp"), None);
        assert_eq!(OutputFormat::parse(""), None);
        assert_eq!(OutputFormat::parse("png "), None);
    }

    #[test]
    fn png_uses_image_export_mode() {
        let args = export_args(
            OutputFormat::Png,
            Path::new("/tmp/ws/005.svg"),
            Path::new("out/005.png"),
            300,
        );
        assert_eq!(args, vec!["-e", "out/005.png", "/tmp/ws/005.svg", "--export-dpi=300"]);
    }

    #[test]
    fn pdf_uses_document_export_mode() {
        let args = export_args(
            OutputFormat::Pdf,
            Path::new("/tmp/ws/005.svg"),
            Path::new("out/005.pdf"),
            600,
        );
        assert_eq!(args, vec!["-A", "out/005.pdf", "/tmp/ws/005.svg", "--export-dpi=600"]);
    }

    #[test]
    fn output_keeps_base_name_and_swaps_extension() {
        let path = output_path(
            Path::new("/tmp/ws/007.svg"),
            Path::new("/cards"),
            OutputFormat::Pdf,
        )
        .unwrap();
        assert_eq!(path, Path::new("/cards/007.pdf"));
    }

    #[test]
    fn missing_renderer_binary_is_a_render_error() {
        let renderer = Renderer::new("/nonexistent/renderer-binary");
        let err = renderer
            .render(
                Path::new("005.svg"),
                Path::new("."),
                OutputFormat::Png,
                300,
            )
            .unwrap_err();
        assert!(matches!(err, CardpressError::RenderInvocation(_)));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_renderer_exit_is_a_render_error() {
        // `false` ignores its arguments and exits 1.
        let renderer = Renderer::new("false");
        let err = renderer
            .render(
                Path::new("005.svg"),
                Path::new("."),
                OutputFormat::Png,
                300,
            )
            .unwrap_err();
        assert!(matches!(err, CardpressError::RenderInvocation(_)));
        assert!(err.to_string().contains("005.svg"));
    }
}
