use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{FccError, Result};

const GLOB_META_CHARS: &[char] = &['*', '?', '[', '{'];

#[derive(Debug, Clone)]
enum PatternMatcher {
    /// Every file below the root.
    All,
    /// Exactly one root-relative path.
    Exact(String),
    Glob {
        matcher: GlobMatcher,
        /// Pattern components that start with `.`, compiled on their own.
        dot_parts: Vec<GlobMatcher>,
    },
}

/// A base glob split into its enumeration root and the root-relative remainder.
///
/// `docs/api/**/*.md` has root `docs/api` and matches `**/*.md` against paths
/// relative to that root.
///
/// Hidden entries (a path component starting with `.`) are never matched by `*`,
/// `?` or `**`; they are selected only by a pattern component that itself starts
/// with `.`, such as `.github` or `.*`.
#[derive(Debug, Clone)]
pub struct BasePattern {
    root: PathBuf,
    matcher: PatternMatcher,
}

impl BasePattern {
    /// Parse a base pattern.
    ///
    /// A pattern without glob metacharacters names either a directory (all files
    /// below it) or a single file (rooted at its parent directory).
    ///
    /// # Errors
    /// Returns `FccError::InvalidPattern` if the glob part cannot be compiled.
    pub fn parse(pattern: &str) -> Result<Self> {
        let parts: Vec<&str> = pattern.split('/').collect();
        let Some(first_glob) = parts.iter().position(|part| has_glob_meta(part)) else {
            return Ok(Self::literal(pattern));
        };

        let prefix = parts[..first_glob].join("/");
        let root = match (prefix.is_empty(), pattern.starts_with('/')) {
            (true, true) => PathBuf::from("/"),
            (true, false) => PathBuf::from("."),
            (false, _) => PathBuf::from(prefix),
        };

        let compile = |glob: &str| {
            GlobBuilder::new(glob)
                .literal_separator(true)
                .build()
                .map(|glob| glob.compile_matcher())
                .map_err(|e| FccError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source: e,
                })
        };

        let matcher = compile(&parts[first_glob..].join("/"))?;
        let dot_parts = parts[first_glob..]
            .iter()
            .filter(|part| part.starts_with('.'))
            .map(|part| compile(part))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root,
            matcher: PatternMatcher::Glob { matcher, dot_parts },
        })
    }

    fn literal(pattern: &str) -> Self {
        let path = Path::new(pattern);
        if path.is_dir() {
            return Self {
                root: path.to_path_buf(),
                matcher: PatternMatcher::All,
            };
        }

        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            root,
            matcher: PatternMatcher::Exact(file_name),
        }
    }

    /// Directory that enumeration starts from and that relative paths are relative to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check a root-relative path (with `/` separators) against the pattern.
    #[must_use]
    pub fn is_match(&self, relative_path: &str) -> bool {
        match &self.matcher {
            PatternMatcher::Exact(name) => relative_path == name,
            PatternMatcher::All => relative_path.split('/').all(|c| self.admits_component(c)),
            PatternMatcher::Glob { matcher, .. } => {
                matcher.is_match(relative_path)
                    && relative_path.split('/').all(|c| self.admits_component(c))
            }
        }
    }

    /// Whether a single path component may appear below the root.
    ///
    /// False only for hidden components the pattern does not name.
    #[must_use]
    pub fn admits_component(&self, name: &str) -> bool {
        if !name.starts_with('.') {
            return true;
        }
        match &self.matcher {
            PatternMatcher::All => false,
            PatternMatcher::Exact(exact) => exact == name,
            PatternMatcher::Glob { dot_parts, .. } => dot_parts.iter().any(|m| m.is_match(name)),
        }
    }
}

fn has_glob_meta(part: &str) -> bool {
    part.contains(GLOB_META_CHARS)
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
