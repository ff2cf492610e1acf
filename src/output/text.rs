use std::io::Write;

use crate::error::Result;
use crate::report::{ChangeKind, CheckSummary, DriftEntry, DriftStatus, ReportChange};

use super::{ColorMode, OutputFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    /// With `verbose >= 1`, in-sync pairs are listed as well.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::IsTerminal::is_terminal(&std::io::stdout())),
            verbose,
        }
    }

    const fn status_icon(status: DriftStatus) -> &'static str {
        match status {
            DriftStatus::InSync => "✓",
            DriftStatus::Drifted => "✗",
            DriftStatus::Missing => "○",
        }
    }

    const fn status_label(status: DriftStatus) -> &'static str {
        match status {
            DriftStatus::InSync => "IN SYNC",
            DriftStatus::Drifted => "DRIFTED",
            DriftStatus::Missing => "MISSING",
        }
    }

    const fn status_color(status: DriftStatus) -> &'static str {
        match status {
            DriftStatus::InSync => ansi::GREEN,
            DriftStatus::Drifted => ansi::RED,
            DriftStatus::Missing => ansi::YELLOW,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_entry(&self, entry: &DriftEntry, output: &mut Vec<u8>) {
        let status = self.colorize(
            Self::status_label(entry.status),
            Self::status_color(entry.status),
        );
        writeln!(
            output,
            "{} {status}: [{}] {} -> {}",
            Self::status_icon(entry.status),
            entry.task,
            entry.path,
            entry.label
        )
        .ok();
    }

    fn format_changes(&self, changes: &[ReportChange], output: &mut Vec<u8>) {
        if changes.is_empty() {
            writeln!(output, "No changes since last report").ok();
            return;
        }

        writeln!(output, "Changes since last report:").ok();
        for change in changes {
            let (marker, color) = match change.kind {
                ChangeKind::Added => ("+", ansi::GREEN),
                ChangeKind::Removed => ("-", ansi::RED),
                ChangeKind::Modified => ("~", ansi::CYAN),
            };
            let marker = self.colorize(marker, color);
            writeln!(output, "  {marker} [{}] {}", change.task, change.path).ok();
        }
    }

    fn format_summary(&self, summary: &CheckSummary) -> String {
        let in_sync = self.colorize(&summary.in_sync.to_string(), ansi::GREEN);
        let drifted = self.colorize(&summary.drifted.to_string(), ansi::RED);
        let missing = self.colorize(&summary.missing.to_string(), ansi::YELLOW);

        format!(
            "Summary: {} tasks, {} files checked, {in_sync} in sync, {drifted} drifted, {missing} missing",
            summary.tasks, summary.files
        )
    }

    #[cfg(test)]
    const fn plain(verbose: u8) -> Self {
        Self {
            use_colors: false,
            verbose,
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &CheckSummary) -> Result<String> {
        let mut output = Vec::new();

        let shown: Vec<&DriftEntry> = if self.verbose >= 1 {
            summary.entries.iter().collect()
        } else {
            summary.problems().collect()
        };
        for entry in &shown {
            self.format_entry(entry, &mut output);
        }
        if !shown.is_empty() {
            writeln!(output).ok();
        }

        if let Some(changes) = &summary.changes {
            self.format_changes(changes, &mut output);
            writeln!(output).ok();
        }

        writeln!(output, "{}", self.format_summary(summary)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
