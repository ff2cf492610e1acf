use rayon::prelude::*;

use crate::Result;
use crate::config::CheckConfig;
use crate::output::HashProgress;
use crate::report::{CheckMapItemOutput, CheckOutput};

use super::CheckMapEvaluator;

/// Runs every configured group concurrently and merges the results into one report.
///
/// Groups are independent: a group whose base matches nothing contributes an empty
/// mapping. The first genuine failure in any group aborts the whole run.
#[derive(Clone, Default)]
pub struct CheckOrchestrator {
    evaluator: CheckMapEvaluator,
}

impl CheckOrchestrator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            evaluator: CheckMapEvaluator::new(),
        }
    }

    #[must_use]
    pub fn with_progress(progress: HashProgress) -> Self {
        Self {
            evaluator: CheckMapEvaluator::with_progress(progress),
        }
    }

    /// Evaluate all groups of `config`.
    ///
    /// # Errors
    /// Returns the first group failure, tagged with the group's name.
    pub fn run(&self, config: &CheckConfig) -> Result<CheckOutput> {
        let results: Vec<(String, CheckMapItemOutput)> = config
            .checking_maps
            .par_iter()
            .map(|(task, item)| {
                let _span = tracing::debug_span!("task", name = %task).entered();
                let output = self.evaluator.evaluate(item).map_err(|e| e.in_task(task))?;
                tracing::debug!(files = output.len(), "task evaluated");
                Ok((task.clone(), output))
            })
            .collect::<Result<_>>()?;

        tracing::info!(tasks = results.len(), "checks complete");
        Ok(results.into_iter().collect())
    }
}

/// Evaluate all groups of `config` without progress reporting.
///
/// # Errors
/// See [`CheckOrchestrator::run`].
pub fn run_checks(config: &CheckConfig) -> Result<CheckOutput> {
    CheckOrchestrator::new().run(config)
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
