//! Fenced-code extraction from cheat-sheet files
//!
//! Only the lines between triple-backtick fences are kept. The fence lines
//! themselves are dropped, and everything outside a fence is ignored.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Marker opening and closing a fenced code block.
pub const FENCE: &str = "```";

/// Provider of raw document text.
///
/// The reader never touches the filesystem directly; callers pick the
/// source, which keeps loading testable without temp files.
pub trait ContentSource: Send + Sync {
    /// Read the whole document at `path`.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}

/// In-memory documents keyed by path.
///
/// Reading a path that was never inserted fails with `NotFound`, the same
/// way a missing file does.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder-style variant of [`MemorySource::insert`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl ContentSource for MemorySource {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            )
        })
    }
}

/// Keep only the lines inside fenced code blocks, in order.
///
/// A line starting with [`FENCE`] toggles the inside/outside state and is
/// never part of the output. An unterminated fence keeps everything up to
/// the end of the text.
///
/// # Example
/// ```
/// use cheat_blocks::extract_fenced;
///
/// let text = "intro\n```lua\nprint(1)\n```\noutro\n";
/// assert_eq!(extract_fenced(text), vec!["print(1)".to_string()]);
/// ```
pub fn extract_fenced(text: &str) -> Vec<String> {
    let mut inside = false;
    let mut lines = Vec::new();

    for line in text.lines() {
        if line.starts_with(FENCE) {
            inside = !inside;
            continue;
        }
        if inside {
            lines.push(line.to_string());
        }
    }

    lines
}

/// Read `path` through `source` and extract its fenced-code lines.
pub fn read_fenced_lines(source: &dyn ContentSource, path: &Path) -> Result<Vec<String>> {
    let text = source.read_to_string(path)?;
    let lines = extract_fenced(&text);
    tracing::debug!(path = %path.display(), lines = lines.len(), "Read fenced lines");
    Ok(lines)
}
