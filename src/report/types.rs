use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hash of a base file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseHash {
    pub hash: String,
}

/// Hash of an existing corresponding file, alongside the hash of its base file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondHash {
    pub hash: String,
    pub base_hash: String,
}

impl CorrespondHash {
    #[must_use]
    pub fn is_in_sync(&self) -> bool {
        self.hash == self.base_hash
    }
}

/// Result for one base file: its hash and, per label, the corresponding file's hash
/// or `None` when the corresponding file does not exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckMapItemFileOutput {
    pub base: BaseHash,
    pub correspond: BTreeMap<String, Option<CorrespondHash>>,
}

impl CheckMapItemFileOutput {
    #[must_use]
    pub fn new(base_hash: String) -> Self {
        Self {
            base: BaseHash { hash: base_hash },
            correspond: BTreeMap::new(),
        }
    }

    /// Record the hash of an existing corresponding file for `label`.
    pub fn set_present(&mut self, label: &str, hash: String) {
        let entry = CorrespondHash {
            hash,
            base_hash: self.base.hash.clone(),
        };
        self.correspond.insert(label.to_string(), Some(entry));
    }

    /// Record that the corresponding file for `label` does not exist.
    pub fn set_absent(&mut self, label: &str) {
        self.correspond.insert(label.to_string(), None);
    }

    /// True when every label has an existing file with the base file's content.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.correspond
            .values()
            .all(|entry| entry.as_ref().is_some_and(CorrespondHash::is_in_sync))
    }
}

/// Results for one task, keyed by base-relative path.
pub type CheckMapItemOutput = BTreeMap<String, CheckMapItemFileOutput>;

/// The full report of one run, keyed by task name.
///
/// Persisted format:
/// ```json
/// {
///   "docs": {
///     "guide.md": {
///       "base": { "hash": "2cf2..." },
///       "correspond": {
///         "mirror": { "hash": "2cf2...", "baseHash": "2cf2..." },
///         "site": null
///       }
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CheckOutput {
    tasks: BTreeMap<String, CheckMapItemOutput>,
}

impl CheckOutput {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add or replace the output of a task.
    #[cfg(test)]
    pub(crate) fn insert(&mut self, task: &str, output: CheckMapItemOutput) {
        self.tasks.insert(task.to_string(), output);
    }

    #[must_use]
    pub fn get(&self, task: &str) -> Option<&CheckMapItemOutput> {
        self.tasks.get(task)
    }

    /// Number of tasks in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Total number of base files across all tasks.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.tasks.values().map(BTreeMap::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CheckMapItemOutput)> {
        self.tasks.iter()
    }
}

impl FromIterator<(String, CheckMapItemOutput)> for CheckOutput {
    fn from_iter<I: IntoIterator<Item = (String, CheckMapItemOutput)>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
