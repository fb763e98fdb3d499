//! [`TestDocs`] builder for on-disk cheat-sheet scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fixtures::{BUILTIN_FILES, fixture};

/// A temporary docs root with helpers for writing cheat sheets and config.
///
/// # Example
///
/// ```rust,no_run
/// use cheat_test_utils::docs::TestDocs;
///
/// let docs = TestDocs::with_builtins();
/// assert!(docs.root().join("lua.html.markdown").exists());
/// ```
pub struct TestDocs {
    temp_dir: TempDir,
}

impl Default for TestDocs {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDocs {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a directory holding the fixture for every built-in language.
    pub fn with_builtins() -> Self {
        let docs = Self::new();
        for (prefix, file) in BUILTIN_FILES {
            docs.write(file, fixture(prefix).unwrap());
        }
        docs
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` (relative to the root) and return the path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Remove a previously written document.
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.root().join(name)).unwrap();
    }

    /// Write a `cheatblocks.toml` whose `root` points at this directory.
    ///
    /// `body` is appended after the generated `root = ...` line.
    pub fn write_config(&self, body: &str) -> PathBuf {
        let root = self.root().display().to_string().replace('\\', "/");
        self.write("cheatblocks.toml", &format!("root = \"{root}\"\n{body}"))
    }
}
