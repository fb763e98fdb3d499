//! Named block type

use std::ops::Range;

/// A named section of a cheat sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block name as produced by the boundary matcher (after aliasing)
    pub name: String,
    /// Trimmed content lines
    pub content: Vec<String>,
    /// Indices of the raw lines this block owned before trimming
    pub span: Range<usize>,
}

impl Block {
    /// Create a new block
    pub fn new(name: impl Into<String>, content: Vec<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            content,
            span,
        }
    }

    /// Content joined with newlines, without a trailing newline.
    pub fn text(&self) -> String {
        self.content.join("\n")
    }

    /// Number of raw lines owned by the block.
    pub fn raw_len(&self) -> usize {
        self.span.len()
    }
}
