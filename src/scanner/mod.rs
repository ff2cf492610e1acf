mod filter;
mod pattern;

pub use filter::{AcceptAll, FileFilter, FnFilter, GlobFilter};
pub use pattern::BasePattern;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FccError, Result};

/// One enumerated base file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BaseFile {
    /// Root-relative path with `/` separators; the report key.
    pub key: String,
    /// Root-relative path as found on disk.
    pub relative: PathBuf,
    /// Full path of the file.
    pub path: PathBuf,
}

/// Trait for enumerating the files a base pattern selects.
pub trait FileScanner {
    /// Return all matching files, sorted by key.
    ///
    /// # Errors
    /// Returns an error if a directory below the root cannot be read.
    fn scan(&self, pattern: &BasePattern) -> Result<Vec<BaseFile>>;
}

/// Walks the pattern's root directory and keeps files that match the pattern and the filter.
///
/// A root that does not exist yields no files. Hidden directories the pattern does
/// not name are not descended into.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, pattern: &BasePattern) -> Result<Vec<BaseFile>> {
        let root = pattern.root();
        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || pattern.admits_component(&e.file_name().to_string_lossy())
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_not_found(&e) && e.depth() == 0 => return Ok(Vec::new()),
                Err(e) if is_not_found(&e) => {
                    tracing::warn!(path = ?e.path(), "skipping entry that vanished or is a dangling link");
                    continue;
                }
                Err(e) => return Err(walk_error(root, e)),
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file) = base_file(root, entry.path()) else {
                continue;
            };
            if pattern.is_match(&file.key) && self.filter.should_include(&file.key) {
                files.push(file);
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Parse `pattern` and enumerate the files it selects that pass `filter`.
///
/// # Errors
/// Returns `FccError::InvalidPattern` if the pattern is not a valid glob, or
/// `FccError::FileAccess` if a directory below the root cannot be read.
pub fn enumerate<F: FileFilter>(pattern: &str, filter: F) -> Result<Vec<BaseFile>> {
    let pattern = BasePattern::parse(pattern)?;
    DirectoryScanner::new(filter).scan(&pattern)
}

fn is_not_found(error: &walkdir::Error) -> bool {
    error
        .io_error()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}

fn walk_error(root: &Path, error: walkdir::Error) -> FccError {
    let path = error.path().unwrap_or(root).to_path_buf();
    FccError::FileAccess {
        path,
        source: error.into(),
    }
}

/// Describe `path` relative to `root`; `None` for the root itself.
fn base_file(root: &Path, path: &Path) -> Option<BaseFile> {
    let relative = path.strip_prefix(root).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }

    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    let key = parts.join("/");
    if relative.to_str().is_none() {
        tracing::warn!(path = %path.display(), key = %key, "file name is not valid UTF-8");
    }

    Some(BaseFile {
        key,
        relative: relative.to_path_buf(),
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
