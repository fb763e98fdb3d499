//! Per-document topic catalog

use cheat_blocks::{Block, ContentSource, DocumentConfig, read_fenced_lines};

use crate::Result;

/// Pseudo-topic listing every topic of a document.
pub const LIST_TOPIC: &str = ":list";

/// Pseudo-topic returning the whole fenced content of a document.
pub const LEARN_TOPIC: &str = ":learn";

/// How a topic name is matched against block names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The name must equal a block name
    #[default]
    Exact,
    /// Fall back to the single block name starting with the given name
    Prefix,
}

/// Outcome of resolving a partial block name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixMatch {
    Unique(String),
    /// Several distinct block names share the prefix, in document order
    Ambiguous(Vec<String>),
    Missing,
}

/// One loaded cheat sheet: its fenced lines, blocks and topic list.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Adapter {
    prefix: String,
    lines: Vec<String>,
    blocks: Vec<Block>,
    topics: Vec<String>,
}

impl Adapter {
    /// Build an adapter from already segmented content.
    pub fn new(prefix: impl Into<String>, lines: Vec<String>, blocks: Vec<Block>) -> Self {
        let topics = blocks
            .iter()
            .map(|b| b.name.clone())
            .chain(std::iter::once(LEARN_TOPIC.to_string()))
            .collect();

        Self {
            prefix: prefix.into(),
            lines,
            blocks,
            topics,
        }
    }

    /// Read and segment the document described by `config`.
    pub fn load(config: &DocumentConfig, source: &dyn ContentSource) -> Result<Self> {
        let lines = read_fenced_lines(source, &config.file_path)?;
        let blocks = config.segment(&lines);
        tracing::debug!(
            language = %config.prefix,
            lines = lines.len(),
            blocks = blocks.len(),
            "Loaded cheat sheet"
        );
        Ok(Self::new(config.prefix.clone(), lines, blocks))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fenced lines of the document, before segmentation.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Check whether `name` is a topic of this document.
    ///
    /// `:learn` is a topic; `:list` is answered by [`Adapter::get`] but is
    /// not listed.
    pub fn is_valid(&self, name: &str) -> bool {
        self.topics.iter().any(|t| t == name)
    }

    /// Topic names in document order, optionally as `language/name`.
    pub fn list_topics(&self, prefixed: bool) -> Vec<String> {
        if prefixed {
            self.topics
                .iter()
                .map(|t| format!("{}/{}", self.prefix, t))
                .collect()
        } else {
            self.topics.clone()
        }
    }

    /// Resolve `prefix` against the distinct block names.
    pub fn resolve_prefix(&self, prefix: &str) -> PrefixMatch {
        let mut candidates: Vec<String> = Vec::new();
        for block in &self.blocks {
            if block.name.starts_with(prefix) && !candidates.contains(&block.name) {
                candidates.push(block.name.clone());
            }
        }

        match candidates.len() {
            0 => PrefixMatch::Missing,
            1 => PrefixMatch::Unique(candidates.remove(0)),
            _ => PrefixMatch::Ambiguous(candidates),
        }
    }

    /// Content for a topic, or `None` if it cannot be resolved.
    ///
    /// - `:list` gives the topic list, one per line, with a trailing newline.
    /// - `:learn` gives every fenced line, with a trailing newline.
    /// - a block name gives that block's content (first block on duplicates),
    ///   joined with newlines and no trailing newline.
    ///
    /// With [`MatchMode::Prefix`], a name that is not a block name resolves
    /// to the only block name starting with it. An ambiguous prefix is
    /// reported as `None`, same as an unknown one; use
    /// [`Adapter::resolve_prefix`] to tell them apart.
    pub fn get(&self, name: &str, mode: MatchMode) -> Option<String> {
        match name {
            LIST_TOPIC => return Some(format!("{}\n", self.topics.join("\n"))),
            LEARN_TOPIC => return Some(format!("{}\n", self.lines.join("\n"))),
            _ => {}
        }

        if let Some(block) = self.block(name) {
            return Some(block.text());
        }

        match mode {
            MatchMode::Prefix => match self.resolve_prefix(name) {
                PrefixMatch::Unique(full) => self.block(&full).map(Block::text),
                PrefixMatch::Ambiguous(_) | PrefixMatch::Missing => None,
            },
            MatchMode::Exact => None,
        }
    }

    fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }
}
