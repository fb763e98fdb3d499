//! Block extraction for "learn X in Y minutes" style cheat sheets.
//!
//! A cheat sheet is a markdown document whose interesting content lives in
//! fenced code blocks. Inside those blocks, sections are introduced by a
//! language-specific heading convention, for example in Lua:
//!
//! ```text
//! ----------------------------------------------------
//! -- 1. Variables and flow control.
//! ----------------------------------------------------
//! ```
//!
//! Loading a document is a three-step pipeline:
//!
//! 1. [`reader`] keeps only the fenced-code lines of the file.
//! 2. [`segment`] slides a `(previous, current, next)` window over those lines
//!    and cuts them into named [`Block`]s wherever a [`BoundaryMatcher`] fires.
//! 3. A [`Trimmer`] strips the heading decoration from every block.
//!
//! Per-language behaviour is data, not code: a [`DocumentConfig`] bundles a
//! [`HeadingPattern`] and a [`TrimRule`], and [`language::builtin_specs`]
//! describes the languages supported out of the box.

pub mod block;
pub mod error;
pub mod language;
pub mod matcher;
pub mod reader;
pub mod segment;
pub mod trim;

pub use block::Block;
pub use error::{Error, Result};
pub use language::{DocumentConfig, LanguageSpec, builtin_spec, builtin_specs};
pub use matcher::{BoundaryMatcher, HeadingPattern, HeadingSpec};
pub use reader::{ContentSource, FsSource, MemorySource, extract_fenced, read_fenced_lines};
pub use segment::{START_BLOCK, segment};
pub use trim::{TrimRule, Trimmer};
