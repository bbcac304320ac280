//! Exit code constants for the cardpress CLI.
//!
//! - 0: Success
//! - 1: Configuration error (bad argument values)
//! - 2: Template parse failure
//! - 3: I/O failure (text file, workspace, output directory)
//! - 4: Template shape failure (no substitution target)
//! - 5: Render invocation failure

/// Successful execution (including a run over zero input lines).
pub const SUCCESS: i32 = 0;

/// Configuration error: invalid argument values.
pub const CONFIG_ERROR: i32 = 1;

/// Template parse failure: SVG missing, unreadable, or malformed.
pub const PARSE_FAILURE: i32 = 2;

/// I/O failure: replacement-text file, workspace, or output directory.
pub const IO_FAILURE: i32 = 3;

/// Template shape failure: no text-bearing substitution-target element.
pub const TEMPLATE_SHAPE_FAILURE: i32 = 4;

/// Render invocation failure: renderer could not be launched or exited non-zero.
pub const RENDER_FAILURE: i32 = 5;
