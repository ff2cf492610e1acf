use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rayon::prelude::*;

use crate::config::CheckMapItem;
use crate::hasher::compute_file_hash;
use crate::output::HashProgress;
use crate::report::{CheckMapItemFileOutput, CheckMapItemOutput};
use crate::scanner::{BaseFile, enumerate as enumerate_base};
use crate::{FccError, Result};

/// Correlates the base files of one group with their corresponding files.
///
/// Base files and (file, label) pairs are hashed in parallel; every unit is joined
/// before the output is returned, and the first error aborts the group.
#[derive(Clone, Default)]
pub struct CheckMapEvaluator {
    progress: Option<HashProgress>,
}

impl CheckMapEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self { progress: None }
    }

    /// Report every hashed file to `progress`.
    #[must_use]
    pub fn with_progress(progress: HashProgress) -> Self {
        Self {
            progress: Some(progress),
        }
    }

    /// Evaluate one group.
    ///
    /// # Errors
    /// Returns an error if the base pattern is invalid, a directory below the base
    /// root cannot be read, a base file cannot be hashed, or an existing
    /// corresponding file cannot be read.
    pub fn evaluate(&self, item: &CheckMapItem) -> Result<CheckMapItemOutput> {
        let base_files = enumerate_base(&item.base, item.filter())?;
        tracing::debug!(
            base = %item.base,
            files = base_files.len(),
            labels = item.correspond.len(),
            "enumerated base files"
        );

        let seeded: Vec<(BaseFile, CheckMapItemFileOutput)> = base_files
            .into_par_iter()
            .map(|base| {
                let hash = self.hash(&base.path)?;
                Ok((base, CheckMapItemFileOutput::new(hash)))
            })
            .collect::<Result<_>>()?;

        seeded
            .into_par_iter()
            .map(|(base, file)| self.fill_correspond(item, base, file))
            .collect()
    }

    fn fill_correspond(
        &self,
        item: &CheckMapItem,
        base: BaseFile,
        mut file: CheckMapItemFileOutput,
    ) -> Result<(String, CheckMapItemFileOutput)> {
        let targets: Vec<(&String, Option<String>)> = item
            .correspond
            .par_iter()
            .map(|(label, dir)| Ok((label, self.hash_if_exists(&dir.join(&base.relative))?)))
            .collect::<Result<_>>()?;

        for (label, hash) in targets {
            match hash {
                Some(hash) => file.set_present(label, hash),
                None => file.set_absent(label),
            }
        }
        Ok((base.key, file))
    }

    /// Hash `path` if it exists; `None` when it (or a parent directory) is absent.
    fn hash_if_exists(&self, path: &Path) -> Result<Option<String>> {
        match fs::metadata(path) {
            Ok(_) => self.hash(path).map(Some),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(source) => Err(FccError::FileAccess {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn hash(&self, path: &Path) -> Result<String> {
        let hash = compute_file_hash(path)?;
        if let Some(progress) = &self.progress {
            progress.inc();
        }
        Ok(hash)
    }
}

/// Evaluate one group without progress reporting.
///
/// # Errors
/// See [`CheckMapEvaluator::evaluate`].
pub fn evaluate(item: &CheckMapItem) -> Result<CheckMapItemOutput> {
    CheckMapEvaluator::new().evaluate(item)
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
