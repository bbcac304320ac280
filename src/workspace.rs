//! Scoped temp workspace for intermediate SVG files.
//!
//! The workspace owns a uniquely-named temporary directory for the lifetime
//! of one pipeline run. Dropping it removes the directory and everything in
//! it, best-effort; removal errors are ignored. It also records every file it
//! writes, in creation order, so the render phase iterates files in the same
//! order the input lines arrived rather than in directory-listing order.

use crate::error::{CardpressError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding per-line intermediate files.
pub struct Workspace {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl Workspace {
    /// Allocate a fresh private directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().map_err(|e| {
            CardpressError::Io(format!("failed to create temporary workspace: {}", e))
        })?;
        Ok(Self {
            dir,
            files: Vec::new(),
        })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an intermediate file into the workspace and record it.
    ///
    /// Returns the full path of the written file.
    pub fn write_file(&mut self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).map_err(|e| {
            CardpressError::Io(format!(
                "failed to write intermediate file '{}': {}",
                path.display(),
                e
            ))
        })?;
        self.files.push(path.clone());
        Ok(path)
    }

    /// Files written so far, in creation order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}
