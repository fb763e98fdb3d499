//! Splitting fenced lines into named blocks

use std::ops::Range;

use crate::block::Block;
use crate::matcher::BoundaryMatcher;
use crate::trim::Trimmer;

/// Name of the implicit block holding everything before the first heading.
pub const START_BLOCK: &str = "Start";

/// Partition `lines` into blocks at every heading found by `matcher`.
///
/// Each line index `i` that has a following line is tested with the window
/// `(lines[i - 1], lines[i], lines[i + 1])`, using `""` as the previous line
/// of the first window. The last line is never tested as a heading.
///
/// Blocks own contiguous, non-overlapping spans of `lines` that together
/// cover the whole input. A new block starts at the heading line, or one
/// line earlier when the matcher [owns the previous line](BoundaryMatcher::owns_previous).
/// The leading [`START_BLOCK`] is always present, even when empty, and is
/// trimmed with [`Trimmer::trim_start_block`]. The last open block takes
/// every remaining line.
///
/// Duplicate names are kept as separate blocks.
pub fn segment<M, T>(lines: &[String], matcher: &M, trimmer: &T) -> Vec<Block>
where
    M: BoundaryMatcher + ?Sized,
    T: Trimmer + ?Sized,
{
    let owns_previous = matcher.owns_previous();
    let mut blocks = Vec::new();
    let mut name = START_BLOCK.to_string();
    let mut start = 0;

    for i in 0..lines.len().saturating_sub(1) {
        let previous = match i {
            0 => "",
            _ => lines[i - 1].as_str(),
        };
        let Some(next_name) = matcher
            .boundary(previous, &lines[i], &lines[i + 1])
            .filter(|n| !n.is_empty())
        else {
            continue;
        };

        let boundary = if owns_previous { i.saturating_sub(1) } else { i };
        let boundary = boundary.max(start);
        tracing::debug!(line = i, block = %next_name, "Found block boundary");

        let block = close(name, lines, start..boundary, trimmer, blocks.is_empty());
        blocks.push(block);
        name = next_name;
        start = boundary;
    }

    let block = close(name, lines, start..lines.len(), trimmer, blocks.is_empty());
    blocks.push(block);
    blocks
}

fn close<T>(name: String, lines: &[String], span: Range<usize>, trimmer: &T, first: bool) -> Block
where
    T: Trimmer + ?Sized,
{
    let raw = &lines[span.clone()];
    let content = if first {
        trimmer.trim_start_block(raw)
    } else {
        trimmer.trim(raw)
    };
    Block::new(name, content, span)
}
