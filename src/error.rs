//! Error types for the cardpress CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cardpress operations.
///
/// Each variant maps to a specific exit code so callers (and shell scripts)
/// can distinguish failure categories.
#[derive(Error, Debug)]
pub enum CardpressError {
    /// User provided invalid arguments or configuration values.
    #[error("{0}")]
    Config(String),

    /// Template SVG is missing, unreadable, or not well-formed XML.
    #[error("Template parse failed: {0}")]
    Parse(String),

    /// File I/O failed (replacement-text file, workspace, or output directory).
    #[error("{0}")]
    Io(String),

    /// Template lacks the expected substitution-target node.
    #[error("Template shape invalid: {0}")]
    TemplateShape(String),

    /// External renderer could not be launched or exited with failure.
    #[error("Render invocation failed: {0}")]
    RenderInvocation(String),
}

impl CardpressError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CardpressError::Config(_) => exit_codes::CONFIG_ERROR,
            CardpressError::Parse(_) => exit_codes::PARSE_FAILURE,
            CardpressError::Io(_) => exit_codes::IO_FAILURE,
            CardpressError::TemplateShape(_) => exit_codes::TEMPLATE_SHAPE_FAILURE,
            CardpressError::RenderInvocation(_) => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for cardpress operations.
pub type Result<T> = std::result::Result<T, CardpressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = CardpressError::Config("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = CardpressError::Parse("unexpected end of file".to_string());
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = CardpressError::Io("file not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn template_shape_error_has_correct_exit_code() {
        let err = CardpressError::TemplateShape("no flowPara".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_SHAPE_FAILURE);
    }

    #[test]
    fn render_error_has_correct_exit_code() {
        let err = CardpressError::RenderInvocation("inkscape exited 1".to_string());
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CardpressError::Parse("unexpected end of file".to_string());
        assert_eq!(err.to_string(), "Template parse failed: unexpected end of file");

        let err = CardpressError::TemplateShape("no flowPara element".to_string());
        assert_eq!(err.to_string(), "Template shape invalid: no flowPara element");
    }
}
