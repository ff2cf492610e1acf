use std::fs;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::{FccError, Result};

use super::CheckOutput;

/// Conventional name of the persisted report inside the output directory.
pub const REPORT_FILENAME: &str = "fcc-report.json";

const TEMP_SUFFIX: &str = ".tmp";

/// Reads and writes the report file in an output directory.
///
/// There is no locking: one writer per output directory is assumed.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the report file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(REPORT_FILENAME)
    }

    /// Load the previous report, treating any failure as "no previous report".
    ///
    /// A missing file is silent; an unreadable or corrupt file is logged.
    #[must_use]
    pub fn load(&self) -> Option<CheckOutput> {
        match self.try_load() {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "ignoring unreadable previous report");
                None
            }
        }
    }

    /// Load the previous report, returning `Ok(None)` if none exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<Option<CheckOutput>> {
        let path = self.path();
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FccError::FileAccess { path, source: e }),
        };

        let reader = BufReader::new(file);
        Ok(Some(serde_json::from_reader(reader)?))
    }

    /// Write the report, replacing any previous one.
    ///
    /// The JSON is written to a temporary sibling file first and then renamed over the
    /// target, so an interrupted write leaves the previous report intact.
    ///
    /// # Errors
    /// Returns `FccError::ReportWrite` if the directory or file cannot be written.
    pub fn save(&self, report: &CheckOutput) -> Result<()> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        atomic_write(&self.path(), json.as_bytes())
    }
}

fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let report_write = |source| FccError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(report_write)?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(TEMP_SUFFIX);
    let temp_path = PathBuf::from(temp_name);

    let write_temp = || -> std::io::Result<()> {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()
    };

    if let Err(e) = write_temp().and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(report_write(e));
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
