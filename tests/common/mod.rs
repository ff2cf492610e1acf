#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the fcc binary.
#[macro_export]
macro_rules! fcc {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("fcc"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `fcc.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file("fcc.toml", content);
    }

    /// Path of the report written by `fcc check` with the default output directory.
    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join("fcc-report.json")
    }

    /// Parses the report written by the last run.
    pub fn read_report(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.report_path()).expect("Failed to read report");
        serde_json::from_str(&content).expect("Report is not valid JSON")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One task comparing `docs/` against `mirror/`.
pub const DOCS_CONFIG: &str = r#"
[checking_maps.docs]
base = "docs/**/*"

[checking_maps.docs.correspond]
mirror = "mirror"
"#;

/// Two tasks, one with a base directory that does not exist.
pub const TWO_TASK_CONFIG: &str = r#"
[checking_maps.docs]
base = "docs/**/*"

[checking_maps.docs.correspond]
mirror = "mirror"

[checking_maps.ghost]
base = "does-not-exist/**/*"

[checking_maps.ghost.correspond]
mirror = "mirror"
"#;

/// Markdown only, drafts excluded.
pub const FILTERED_CONFIG: &str = r#"
[checking_maps.docs]
base = "docs/**/*"
include = ["**/*.md"]
exclude = ["drafts/**"]

[checking_maps.docs.correspond]
mirror = "mirror"
"#;
