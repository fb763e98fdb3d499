//! Catalog configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! root = "/srv/learnxinyminutes-docs"
//! on_load_error = "skip"
//! languages = ["lua", "python"]
//!
//! [[custom]]
//! prefix = "ruby"
//! file = "ruby.html.markdown"
//! heading = { current = "#\\s+[0-9]+\\.", strip = "#\\s+[0-9]+\\.\\s*" }
//! trim = { leading = 1, trim_blank = true }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cheat_blocks::{DocumentConfig, LanguageSpec, builtin_spec, builtin_specs};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::registry::LoadPolicy;

/// Where the cheat sheets live and which languages to serve.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Directory the document paths are relative to
    pub root: PathBuf,
    #[serde(default)]
    pub on_load_error: LoadPolicy,
    /// Built-in languages to enable; all of them when absent
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    /// Additional languages defined in the config file
    #[serde(default)]
    pub custom: Vec<LanguageSpec>,
}

impl CatalogConfig {
    /// Config serving every built-in language from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            on_load_error: LoadPolicy::default(),
            languages: None,
            custom: Vec::new(),
        }
    }

    /// Enabled language specs: selected built-ins first, then custom ones.
    ///
    /// # Errors
    ///
    /// `UnknownLanguage` for a selected prefix that is not built in,
    /// `DuplicateLanguage` when a prefix appears twice.
    pub fn specs(&self) -> Result<Vec<LanguageSpec>> {
        let mut specs = match &self.languages {
            None => builtin_specs(),
            Some(selected) => selected
                .iter()
                .map(|prefix| {
                    builtin_spec(prefix).ok_or_else(|| Error::UnknownLanguage {
                        prefix: prefix.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };
        specs.extend(self.custom.iter().cloned());

        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|earlier| earlier.prefix == spec.prefix) {
                return Err(Error::DuplicateLanguage {
                    prefix: spec.prefix.clone(),
                });
            }
        }

        Ok(specs)
    }

    /// Compile the enabled languages against [`CatalogConfig::root`].
    pub fn document_configs(&self) -> Result<Vec<DocumentConfig>> {
        self.specs()?
            .iter()
            .map(|spec| spec.compile(&self.root).map_err(Error::from))
            .collect()
    }
}

/// Read and parse a TOML catalog config.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config: CatalogConfig = toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), root = %config.root.display(), "Loaded catalog config");
    Ok(config)
}
