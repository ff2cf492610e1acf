use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{FccError, Result};

/// Decides whether a base-relative path (with `/` separators) takes part in a check.
///
/// Implementations must be pure: no I/O, no side effects.
pub trait FileFilter {
    fn should_include(&self, relative_path: &str) -> bool;
}

impl<F: FileFilter + ?Sized> FileFilter for &F {
    fn should_include(&self, relative_path: &str) -> bool {
        (**self).should_include(relative_path)
    }
}

/// Accepts every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl FileFilter for AcceptAll {
    fn should_include(&self, _relative_path: &str) -> bool {
        true
    }
}

/// Adapts a plain predicate function into a [`FileFilter`].
#[derive(Debug, Clone, Copy)]
pub struct FnFilter<F>(pub F);

impl<F: Fn(&str) -> bool> FileFilter for FnFilter<F> {
    fn should_include(&self, relative_path: &str) -> bool {
        (self.0)(relative_path)
    }
}

/// Include/exclude glob filter.
///
/// A path is kept when it matches an include pattern (or no include patterns are
/// configured) and then matches no exclude pattern.
#[derive(Debug, Clone)]
pub struct GlobFilter {
    include_patterns: Option<GlobSet>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter from include and exclude glob patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let include_patterns = if include_patterns.is_empty() {
            None
        } else {
            Some(build_glob_set(include_patterns)?)
        };

        Ok(Self {
            include_patterns,
            exclude_patterns: build_glob_set(exclude_patterns)?,
        })
    }

    fn is_included(&self, relative_path: &str) -> bool {
        self.include_patterns
            .as_ref()
            .is_none_or(|set| set.is_match(relative_path))
    }

    fn is_excluded(&self, relative_path: &str) -> bool {
        self.exclude_patterns.is_match(relative_path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative_path: &str) -> bool {
        self.is_included(relative_path) && !self.is_excluded(relative_path)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| FccError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| FccError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
