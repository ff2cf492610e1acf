use serde::Serialize;

use super::{CheckMapItemFileOutput, CheckOutput};

/// State of one (base file, label) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftStatus {
    InSync,
    Drifted,
    Missing,
}

impl DriftStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InSync => "in_sync",
            Self::Drifted => "drifted",
            Self::Missing => "missing",
        }
    }
}

/// One (task, base file, label) pair and its state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DriftEntry {
    pub task: String,
    pub path: String,
    pub label: String,
    pub status: DriftStatus,
}

/// How a (task, path) entry changed between the previous and the current report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReportChange {
    pub task: String,
    pub path: String,
    pub kind: ChangeKind,
}

/// Aggregated view of a report, used for presenting a run's outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub tasks: usize,
    pub files: usize,
    pub in_sync: usize,
    pub drifted: usize,
    pub missing: usize,
    /// Every (task, path, label) pair, sorted.
    pub entries: Vec<DriftEntry>,
    /// Changes relative to the previous report; `None` when there was no previous report.
    pub changes: Option<Vec<ReportChange>>,
}

impl CheckSummary {
    /// True if any corresponding file is drifted or missing.
    #[must_use]
    pub const fn has_drift(&self) -> bool {
        self.drifted > 0 || self.missing > 0
    }

    /// Entries that are not in sync.
    pub fn problems(&self) -> impl Iterator<Item = &DriftEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.status != DriftStatus::InSync)
    }

    #[must_use]
    pub fn with_changes(mut self, changes: Vec<ReportChange>) -> Self {
        self.changes = Some(changes);
        self
    }
}

/// Classify every (task, base file, label) pair in a report.
#[must_use]
pub fn summarize(report: &CheckOutput) -> CheckSummary {
    let mut summary = CheckSummary {
        tasks: report.len(),
        files: report.file_count(),
        ..CheckSummary::default()
    };

    for (task, item) in report.iter() {
        for (path, file) in item {
            for (label, entry) in &file.correspond {
                let status = match entry {
                    None => DriftStatus::Missing,
                    Some(hash) if hash.is_in_sync() => DriftStatus::InSync,
                    Some(_) => DriftStatus::Drifted,
                };
                match status {
                    DriftStatus::InSync => summary.in_sync += 1,
                    DriftStatus::Drifted => summary.drifted += 1,
                    DriftStatus::Missing => summary.missing += 1,
                }
                summary.entries.push(DriftEntry {
                    task: task.clone(),
                    path: path.clone(),
                    label: label.clone(),
                    status,
                });
            }
        }
    }

    summary.entries.sort();
    summary
}

/// List (task, path) entries that were added, removed, or modified since `previous`.
#[must_use]
pub fn compare_reports(previous: &CheckOutput, current: &CheckOutput) -> Vec<ReportChange> {
    let mut changes = Vec::new();

    for (task, item) in current.iter() {
        let previous_item = previous.get(task);
        for (path, file) in item {
            let before = previous_item.and_then(|p| p.get(path));
            if let Some(kind) = classify_change(before, Some(file)) {
                changes.push(change(task, path, kind));
            }
        }
    }

    for (task, item) in previous.iter() {
        let current_item = current.get(task);
        for path in item.keys() {
            if current_item.is_none_or(|c| !c.contains_key(path)) {
                changes.push(change(task, path, ChangeKind::Removed));
            }
        }
    }

    changes.sort();
    changes
}

fn classify_change(
    before: Option<&CheckMapItemFileOutput>,
    after: Option<&CheckMapItemFileOutput>,
) -> Option<ChangeKind> {
    match (before, after) {
        (None, Some(_)) => Some(ChangeKind::Added),
        (Some(_), None) => Some(ChangeKind::Removed),
        (Some(b), Some(a)) if b != a => Some(ChangeKind::Modified),
        _ => None,
    }
}

fn change(task: &str, path: &str, kind: ChangeKind) -> ReportChange {
    ReportChange {
        task: task.to_string(),
        path: path.to_string(),
        kind,
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
