//! Replacement-text line source.
//!
//! Reads the whole text file and splits it into lines that keep their
//! trailing `\n` (and any `\r` before it). The substituted text must match
//! the file byte-for-byte, so nothing is trimmed here.

use crate::error::{CardpressError, Result};
use std::path::Path;

/// Read the replacement-text file into an ordered sequence of lines.
///
/// Each line keeps its trailing terminator; a file without a final newline
/// yields a last line without one. An empty file yields an empty sequence,
/// which is not an error.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        CardpressError::Io(format!(
            "failed to read text file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(content.split_inclusive('\n').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn lines_keep_trailing_newlines() {
        let file = write_temp("Alice\nBob\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["Alice\n", "Bob\n"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let file = write_temp("Alice\nBob");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["Alice\n", "Bob"]);
    }

    #[test]
    fn crlf_terminators_are_preserved_verbatim() {
        let file = write_temp("Alice\r\nBob\r\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["Alice\r\n", "Bob\r\n"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let file = write_temp("Alice\n\nBob\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["Alice\n", "\n", "Bob\n"]);
    }

    #[test]
    fn empty_file_yields_empty_sequence() {
        let file = write_temp("");
        let lines = read_lines(file.path()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_lines("/nonexistent/names.txt").unwrap_err();
        assert!(matches!(err, CardpressError::Io(_)));
        assert!(err.to_string().contains("/nonexistent/names.txt"));
    }
}
