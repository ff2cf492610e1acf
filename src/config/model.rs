use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::{AcceptAll, FileFilter};

// ============================================================================
// On-disk configuration (TOML)
// ============================================================================

/// Contents of a configuration file, before path resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Comparison groups keyed by task name.
    #[serde(default, alias = "checkingMaps")]
    pub checking_maps: BTreeMap<String, CheckMapItemConfig>,

    /// Directory for the report file. Defaults to the configuration file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// One comparison group as written in the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckMapItemConfig {
    /// Glob selecting the authoritative files.
    pub base: String,

    /// Target directories keyed by label.
    #[serde(default)]
    pub correspond: BTreeMap<String, PathBuf>,

    /// Keep only base-relative paths matching one of these globs (empty keeps all).
    #[serde(default)]
    pub include: Vec<String>,

    /// Drop base-relative paths matching any of these globs, after `include`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

// ============================================================================
// Resolved configuration consumed by the checker
// ============================================================================

/// A comparison group with resolved paths and a compiled filter.
pub struct CheckMapItem {
    pub base: String,
    pub correspond: BTreeMap<String, PathBuf>,
    filter: Box<dyn FileFilter + Send + Sync>,
}

impl CheckMapItem {
    /// Create a group that includes every file the base pattern selects.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            correspond: BTreeMap::new(),
            filter: Box::new(AcceptAll),
        }
    }

    #[must_use]
    pub fn with_correspond(mut self, label: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.correspond.insert(label.into(), dir.into());
        self
    }

    #[must_use]
    pub fn with_filter<F: FileFilter + Send + Sync + 'static>(mut self, filter: F) -> Self {
        self.filter = Box::new(filter);
        self
    }

    #[must_use]
    pub fn filter(&self) -> &(dyn FileFilter + Send + Sync) {
        self.filter.as_ref()
    }
}

impl fmt::Debug for CheckMapItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckMapItem")
            .field("base", &self.base)
            .field("correspond", &self.correspond)
            .finish_non_exhaustive()
    }
}

/// Resolved configuration for one run.
#[derive(Debug)]
pub struct CheckConfig {
    pub checking_maps: BTreeMap<String, CheckMapItem>,
    /// Directory holding the report file.
    pub output: PathBuf,
}

impl CheckConfig {
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            checking_maps: BTreeMap::new(),
            output: output.into(),
        }
    }

    #[must_use]
    pub fn with_task(mut self, name: impl Into<String>, item: CheckMapItem) -> Self {
        self.checking_maps.insert(name.into(), item);
        self
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
