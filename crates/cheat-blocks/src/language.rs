//! Per-language document conventions
//!
//! A language is described by a [`LanguageSpec`]: where its cheat sheet
//! lives and how its section headings look. Compiling the spec against a
//! root directory yields the [`DocumentConfig`] the segmenter runs with.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::block::Block;
use crate::matcher::{HeadingPattern, HeadingSpec};
use crate::segment::segment;
use crate::trim::TrimRule;
use crate::Result;

/// Declarative description of one cheat-sheet language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageSpec {
    /// Topic prefix, e.g. `lua` in `lua/Metatables`
    pub prefix: String,
    /// Document path, relative to the catalog root
    pub file: PathBuf,
    pub heading: HeadingSpec,
    #[serde(default)]
    pub trim: TrimRule,
}

impl LanguageSpec {
    /// Compile the heading patterns and resolve the file under `root`.
    pub fn compile(&self, root: &Path) -> Result<DocumentConfig> {
        Ok(DocumentConfig {
            prefix: self.prefix.clone(),
            file_path: root.join(&self.file),
            matcher: HeadingPattern::compile(&self.prefix, &self.heading)?,
            trimmer: self.trim,
        })
    }
}

/// Everything needed to load and segment one document.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub prefix: String,
    pub file_path: PathBuf,
    pub matcher: HeadingPattern,
    pub trimmer: TrimRule,
}

impl DocumentConfig {
    /// Segment already-extracted lines with this document's rules.
    pub fn segment(&self, lines: &[String]) -> Vec<Block> {
        segment(lines, &self.matcher, &self.trimmer)
    }
}

fn aliases(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn lua() -> LanguageSpec {
    LanguageSpec {
        prefix: "lua".into(),
        file: "lua.html.markdown".into(),
        heading: HeadingSpec {
            previous: Some("-----+".into()),
            current: r"--\s+[0-9]+\.".into(),
            next: Some("-------+".into()),
            strip: r"--+\s+[0-9]+\.\s*".into(),
            trim_chars: ".".into(),
            aliases: aliases(&[
                ("1_Metatables_and_metamethods", "Metatables"),
                ("2_Class-like_tables_and_inheritance", "Class-like_tables"),
                ("Variables_and_flow_control", "Flow_control"),
            ]),
            ..Default::default()
        },
        trim: TrimRule::new(3, 0, true),
    }
}

fn php() -> LanguageSpec {
    LanguageSpec {
        prefix: "php".into(),
        file: "php.html.markdown".into(),
        heading: HeadingSpec {
            previous: Some(r"/\*\*\*\*\*+".into()),
            current: r"\s*\*\s*".into(),
            next: Some(r"\s*\*/".into()),
            strip: r"\s*\*\s*".into(),
            remove: vec!["&".into()],
            ..Default::default()
        },
        trim: TrimRule::new(3, 0, false),
    }
}

fn python() -> LanguageSpec {
    LanguageSpec {
        prefix: "python".into(),
        file: "python.html.markdown".into(),
        heading: HeadingSpec {
            previous: Some("#######+".into()),
            current: r"#+\s+[0-9]+\.".into(),
            next: Some("#######+".into()),
            strip: r"#+\s+[0-9]+\.\s*".into(),
            ..Default::default()
        },
        trim: TrimRule::new(3, 0, true),
    }
}

fn perl() -> LanguageSpec {
    LanguageSpec {
        prefix: "perl".into(),
        file: "perl.html.markdown".into(),
        heading: HeadingSpec {
            current: r"####+\s+".into(),
            strip: r"#+\s".into(),
            aliases: aliases(&[
                ("Conditional_and_looping_constructs", "Control_Flow"),
                ("Perl_variable_types", "Types"),
                ("Files_and_I/O", "Files"),
                ("Writing_subroutines", "Subroutines"),
            ]),
            ..Default::default()
        },
        trim: TrimRule::new(1, 0, true),
    }
}

/// The languages supported out of the box, in registration order.
pub fn builtin_specs() -> Vec<LanguageSpec> {
    vec![lua(), python(), php(), perl()]
}

/// Look up a built-in language by prefix.
pub fn builtin_spec(prefix: &str) -> Option<LanguageSpec> {
    builtin_specs().into_iter().find(|spec| spec.prefix == prefix)
}
