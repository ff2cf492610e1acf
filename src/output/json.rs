use serde::Serialize;

use crate::error::Result;
use crate::report::{CheckSummary, DriftEntry, ReportChange};

use super::OutputFormatter;

/// Machine-readable summary. Lists only the pairs that are not in sync.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    problems: Vec<&'a DriftEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<&'a [ReportChange]>,
}

#[derive(Serialize)]
struct Summary {
    tasks: usize,
    files: usize,
    in_sync: usize,
    drifted: usize,
    missing: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &CheckSummary) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                tasks: summary.tasks,
                files: summary.files,
                in_sync: summary.in_sync,
                drifted: summary.drifted,
                missing: summary.missing,
            },
            problems: summary.problems().collect(),
            changes: summary.changes.as_deref(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
