//! Language registry and cross-document lookup
//!
//! Topics are addressed as `language/name`. The part before the first `/`
//! selects an [`Adapter`]; the rest is resolved by that adapter.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use cheat_blocks::{ContentSource, DocumentConfig, FsSource};
use serde::Deserialize;

use crate::adapter::{Adapter, MatchMode};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};

/// What to do when a language's document cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Fail registry construction with the load error
    #[default]
    Abort,
    /// Leave the language out, log a warning and record it as skipped
    Skip,
}

/// Language prefix -> loaded adapter.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    adapters: BTreeMap<String, Adapter>,
    skipped: Vec<String>,
}

/// Load every document in `configs` and index the adapters by prefix.
///
/// # Errors
///
/// Returns `DuplicateLanguage` if two configs share a prefix, and, under
/// [`LoadPolicy::Abort`], the first document load error.
pub fn build_registry(
    configs: &[DocumentConfig],
    source: &dyn ContentSource,
    policy: LoadPolicy,
) -> Result<Registry> {
    let mut registry = Registry::new();

    for config in configs {
        if registry.adapters.contains_key(&config.prefix) || registry.skipped.contains(&config.prefix)
        {
            return Err(Error::DuplicateLanguage {
                prefix: config.prefix.clone(),
            });
        }

        match Adapter::load(config, source) {
            Ok(adapter) => registry.insert(adapter)?,
            Err(err) if policy == LoadPolicy::Skip => {
                tracing::warn!(language = %config.prefix, error = %err, "Skipping cheat sheet");
                registry.skipped.push(config.prefix.clone());
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        languages = registry.adapters.len(),
        skipped = registry.skipped.len(),
        "Built cheat sheet registry"
    );
    Ok(registry)
}

fn split_topic(topic: &str) -> Option<(&str, &str)> {
    topic.split_once('/')
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every language enabled by `config` from the filesystem.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let documents = config.document_configs()?;
        build_registry(&documents, &FsSource, config.on_load_error)
    }

    /// Register an adapter under its prefix.
    ///
    /// # Errors
    ///
    /// `DuplicateLanguage` if the prefix is already registered; the existing
    /// adapter is kept.
    pub fn insert(&mut self, adapter: Adapter) -> Result<()> {
        match self.adapters.entry(adapter.prefix().to_string()) {
            Entry::Occupied(entry) => Err(Error::DuplicateLanguage {
                prefix: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(adapter);
                Ok(())
            }
        }
    }

    /// Adapter for a language prefix.
    pub fn adapter(&self, language: &str) -> Option<&Adapter> {
        self.adapters.get(language)
    }

    /// Registered language prefixes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        self.adapters.keys().map(String::as_str).collect()
    }

    /// Languages left out under [`LoadPolicy::Skip`].
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Resolve a `language/name` topic.
    ///
    /// Returns `None` for a topic without `/`, an unknown language or an
    /// unresolvable name.
    pub fn lookup(&self, topic: &str, mode: MatchMode) -> Option<String> {
        let (language, name) = split_topic(topic)?;
        self.adapters.get(language)?.get(name, mode)
    }

    /// Exact lookup that reports "not found" as an empty string.
    pub fn get(&self, topic: &str) -> String {
        self.lookup(topic, MatchMode::Exact).unwrap_or_default()
    }

    /// Every topic of every language as `language/name`, by language.
    pub fn list_all(&self) -> Vec<String> {
        self.adapters
            .values()
            .flat_map(|adapter| adapter.list_topics(true))
            .collect()
    }

    /// Check whether a `language/name` topic exists.
    pub fn is_valid(&self, topic: &str) -> bool {
        split_topic(topic)
            .and_then(|(language, name)| Some(self.adapters.get(language)?.is_valid(name)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheat_blocks::Block;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(Adapter::new(
            "lua",
            vec!["x".into()],
            vec![Block::new("Tables", vec!["t = {}".into()], 0..1)],
        ))
        .unwrap();
        registry.insert(Adapter::new(
            "perl",
            vec!["y".into()],
            vec![Block::new("Types", vec!["my $x;".into()], 0..1)],
        ))
        .unwrap();
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list_all().is_empty());
    }

    #[test]
    fn test_insert_rejects_registered_prefix() {
        let mut registry = registry();
        let err = registry
            .insert(Adapter::new(
                "lua",
                Vec::new(),
                vec![Block::new("Tables", vec!["other".into()], 0..0)],
            ))
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateLanguage { prefix } if prefix == "lua"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("lua/Tables"), "t = {}");
    }

    #[test]
    fn test_lookup_delegates_to_language() {
        let registry = registry();
        assert_eq!(registry.get("lua/Tables"), "t = {}");
        assert_eq!(registry.get("perl/Types"), "my $x;");
    }

    #[test]
    fn test_only_first_slash_splits() {
        let mut registry = Registry::new();
        registry.insert(Adapter::new(
            "perl",
            Vec::new(),
            vec![Block::new("Files_and_I/O", vec!["open".into()], 0..0)],
        ))
        .unwrap();
        assert_eq!(registry.get("perl/Files_and_I/O"), "open");
    }

    #[test]
    fn test_malformed_and_unknown_topics() {
        let registry = registry();
        assert_eq!(registry.lookup("Tables", MatchMode::Exact), None);
        assert_eq!(registry.get("Tables"), "");
        assert_eq!(registry.get("ruby/Tables"), "");
        assert!(!registry.is_valid("Tables"));
        assert!(!registry.is_valid("ruby/Tables"));
    }

    #[test]
    fn test_prefix_lookup() {
        let registry = registry();
        assert_eq!(registry.lookup("lua/Tab", MatchMode::Exact), None);
        assert_eq!(
            registry.lookup("lua/Tab", MatchMode::Prefix).as_deref(),
            Some("t = {}")
        );
    }

    #[test]
    fn test_list_all_is_sorted_by_language() {
        let registry = registry();
        assert_eq!(
            registry.list_all(),
            vec!["lua/Tables", "lua/:learn", "perl/Types", "perl/:learn"]
        );
        assert_eq!(registry.languages(), vec!["lua", "perl"]);
    }

    #[test]
    fn test_is_valid() {
        let registry = registry();
        assert!(registry.is_valid("lua/Tables"));
        assert!(registry.is_valid("perl/:learn"));
        assert!(!registry.is_valid("perl/Tables"));
    }
}
