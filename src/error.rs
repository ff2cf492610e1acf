use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FccError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read file: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Task '{task}' failed: {source}")]
    Task {
        task: String,
        #[source]
        source: Box<FccError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FccError {
    /// Wraps an error with the name of the task that produced it.
    #[must_use]
    pub fn in_task(self, task: &str) -> Self {
        Self::Task {
            task: task.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns a short label for the error category, used as the heading of error output.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigNotFound { .. } | Self::ConfigParse { .. } => {
                "Config error"
            }
            Self::InvalidPattern { .. } => "Pattern error",
            Self::FileAccess { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO error",
            Self::ReportWrite { .. } | Self::JsonSerialize(_) => "Report error",
            Self::Task { source, .. } => source.error_type(),
        }
    }

    /// Returns the innermost cause message, if the error wraps a lower-level source.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::FileAccess { source, .. }
            | Self::FileWrite { source, .. }
            | Self::ReportWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::Task { source, .. } => source.detail(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FccError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
