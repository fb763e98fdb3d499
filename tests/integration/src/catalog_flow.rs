//! End-to-end tests: config file -> registry -> topic lookups.

use cheat_catalog::{MatchMode, Registry, load_config, logging};
use cheat_test_utils::docs::TestDocs;
use pretty_assertions::assert_eq;

const RUBY: &str = "Ruby cheat sheet

```ruby
# Comment

# 1. Strings and symbols
'hello'

# 2. Arrays
[1, 2]
```
";

const RUBY_CONFIG: &str = r#"
[[custom]]
prefix = "ruby"
file = "sheets/ruby.md"

[custom.heading]
current = '#\s+[0-9]+\.'
strip = '#\s+[0-9]+\.\s*'
aliases = { "Strings_and_symbols" = "Strings" }

[custom.trim]
leading = 1
trim_blank = true
"#;

fn registry_for(docs: &TestDocs, config_body: &str) -> Registry {
    let _ = logging::init();
    let config = load_config(&docs.write_config(config_body)).unwrap();
    Registry::from_config(&config).unwrap()
}

#[test]
fn test_builtins_served_from_disk() {
    let docs = TestDocs::with_builtins();
    let registry = registry_for(&docs, "");

    assert_eq!(registry.len(), 4);
    assert!(registry.skipped().is_empty());
    assert_eq!(
        registry.get("python/Variables_and_Collections"),
        "li = []\nli.append(1)"
    );
    assert_eq!(registry.get("php/Arrays_Lists"), "\n$associative = ['One' => 1];");
    assert!(registry.get("lua/:list").starts_with("Start\nFlow_control\n"));
}

#[test]
fn test_custom_language_alongside_builtins() {
    let docs = TestDocs::with_builtins();
    docs.write("sheets/ruby.md", RUBY);
    let registry = registry_for(&docs, RUBY_CONFIG);

    assert_eq!(
        registry.languages(),
        vec!["lua", "perl", "php", "python", "ruby"]
    );
    assert_eq!(registry.get("ruby/Strings"), "'hello'");
    assert_eq!(registry.get("ruby/Arrays"), "[1, 2]");
    assert_eq!(registry.get("ruby/Start"), "# Comment");
    assert_eq!(
        registry.get("ruby/:list"),
        "Start\nStrings\nArrays\n:learn\n"
    );
    assert_eq!(
        registry.lookup("ruby/Arr", MatchMode::Prefix).as_deref(),
        Some("[1, 2]")
    );
}

#[test]
fn test_missing_custom_document_aborts_by_default() {
    let docs = TestDocs::with_builtins();
    let config = load_config(&docs.write_config(RUBY_CONFIG)).unwrap();

    let err = Registry::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("ruby.md"));
}

#[test]
fn test_only_selected_builtins_load() {
    let docs = TestDocs::new();
    docs.write("perl.html.markdown", cheat_test_utils::fixtures::PERL);
    let registry = registry_for(&docs, "languages = [\"perl\"]\n");

    assert_eq!(registry.languages(), vec!["perl"]);
    assert_eq!(
        registry.list_all(),
        vec!["perl/Start", "perl/Types", "perl/Control_Flow", "perl/:learn"]
    );
    assert!(!registry.is_valid("lua/Tables"));
    assert!(!registry.is_valid("no-slash"));
}
