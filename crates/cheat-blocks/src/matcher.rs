//! Heading detection over a three-line window
//!
//! A boundary matcher looks at `(previous, current, next)` and decides
//! whether `current` is a section heading. When it is, the matcher returns
//! the block name derived from the heading text.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

use crate::{Error, Result};

/// Detects section headings and names them.
pub trait BoundaryMatcher {
    /// Return the block name if `current` starts a new block.
    ///
    /// An empty name is treated the same as `None`.
    fn boundary(&self, previous: &str, current: &str, next: &str) -> Option<String>;

    /// Whether the `previous` line is part of the heading decoration.
    ///
    /// When true, the segmenter hands that line to the new block instead of
    /// the one being closed.
    fn owns_previous(&self) -> bool {
        false
    }
}

impl<F> BoundaryMatcher for F
where
    F: Fn(&str, &str, &str) -> Option<String>,
{
    fn boundary(&self, previous: &str, current: &str, next: &str) -> Option<String> {
        self(previous, current, next)
    }
}

/// Declarative heading convention, as written in config files.
///
/// All patterns are matched at the start of the line only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingSpec {
    /// Pattern the line above the heading must match, if constrained
    pub previous: Option<String>,
    /// Pattern the heading line itself must match
    pub current: String,
    /// Pattern the line below the heading must match, if constrained
    pub next: Option<String>,
    /// Pattern removed (everywhere) from the heading to get the bare title
    pub strip: String,
    /// Literal substrings removed from the title
    pub remove: Vec<String>,
    /// Characters trimmed from both ends of the title
    pub trim_chars: String,
    /// Title -> canonical block name
    pub aliases: BTreeMap<String, String>,
}

/// Compiled form of a [`HeadingSpec`].
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    previous: Option<Regex>,
    current: Regex,
    next: Option<Regex>,
    strip: Regex,
    remove: Vec<String>,
    trim_chars: String,
    aliases: BTreeMap<String, String>,
}

fn anchored(language: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})")).map_err(|e| Error::pattern(language, pattern, e))
}

fn line_matches(pattern: Option<&Regex>, line: &str) -> bool {
    pattern.is_none_or(|re| re.is_match(line))
}

impl HeadingPattern {
    /// Compile `spec`, reporting bad patterns against `language`.
    pub fn compile(language: &str, spec: &HeadingSpec) -> Result<Self> {
        let optional = |pattern: &Option<String>| -> Result<Option<Regex>> {
            pattern.as_deref().map(|p| anchored(language, p)).transpose()
        };

        Ok(Self {
            previous: optional(&spec.previous)?,
            current: anchored(language, &spec.current)?,
            next: optional(&spec.next)?,
            strip: Regex::new(&spec.strip).map_err(|e| Error::pattern(language, &spec.strip, e))?,
            remove: spec.remove.clone(),
            trim_chars: spec.trim_chars.clone(),
            aliases: spec.aliases.clone(),
        })
    }

    /// Turn a heading line into a block name.
    ///
    /// Strips the numbering/decoration, joins the remaining words with `_`
    /// and applies the alias table. Returns `None` if nothing is left.
    pub fn block_name(&self, heading: &str) -> Option<String> {
        let mut title = self.strip.replace_all(heading, "").into_owned();
        for needle in &self.remove {
            title = title.replace(needle.as_str(), "");
        }

        let name = title
            .trim_matches(|c: char| self.trim_chars.contains(c))
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");

        if name.is_empty() {
            return None;
        }

        match self.aliases.get(&name) {
            Some(canonical) => Some(canonical.clone()),
            None => Some(name),
        }
    }
}

impl BoundaryMatcher for HeadingPattern {
    fn boundary(&self, previous: &str, current: &str, next: &str) -> Option<String> {
        let is_heading = self.current.is_match(current)
            && line_matches(self.previous.as_ref(), previous)
            && line_matches(self.next.as_ref(), next);

        if is_heading {
            self.block_name(current)
        } else {
            None
        }
    }

    fn owns_previous(&self) -> bool {
        self.previous.is_some()
    }
}
