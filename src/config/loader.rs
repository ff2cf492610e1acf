use std::path::{Path, PathBuf};

use crate::error::{FccError, Result};
use crate::scanner::GlobFilter;

use super::model::{CheckConfig, CheckMapItem, CheckMapItemConfig, ConfigFile};

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "fcc.toml";

/// Trait for loading a resolved configuration.
pub trait ConfigLoader {
    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, cannot be read, or is invalid.
    fn load_from_path(&self, path: &Path) -> Result<CheckConfig>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Canonicalize a path to its absolute, normalized form.
    ///
    /// # Errors
    /// Returns an error if the path cannot be canonicalized (e.g., file doesn't exist).
    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        dunce::canonicalize(path)
    }
}

/// Loads a TOML configuration file and resolves it into a [`CheckConfig`].
///
/// Relative `base`, `correspond` and `output` paths are resolved against the
/// directory containing the configuration file.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn absolute_config_path(&self, path: &Path) -> Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.fs.current_dir()?.join(path)
        };

        if !self.fs.exists(&joined) {
            return Err(FccError::ConfigNotFound { path: joined });
        }

        self.fs
            .canonicalize(&joined)
            .map_err(|source| FccError::FileAccess {
                path: joined,
                source,
            })
    }

    fn parse_config(path: &Path, content: &str) -> Result<ConfigFile> {
        toml::from_str(content).map_err(|source| FccError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<CheckConfig> {
        let config_path = self.absolute_config_path(path)?;
        let content =
            self.fs
                .read_to_string(&config_path)
                .map_err(|source| FccError::FileAccess {
                    path: config_path.clone(),
                    source,
                })?;

        let config_file = Self::parse_config(&config_path, &content)?;
        let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        tracing::debug!(
            path = %config_path.display(),
            tasks = config_file.checking_maps.len(),
            "loaded configuration"
        );

        resolve_config(config_file, config_dir)
    }
}

/// Validate a parsed configuration and resolve its paths against `config_dir`.
///
/// # Errors
/// Returns an error if a task is malformed or an include/exclude pattern is invalid.
pub fn resolve_config(config_file: ConfigFile, config_dir: &Path) -> Result<CheckConfig> {
    let output = config_file
        .output
        .map_or_else(|| config_dir.to_path_buf(), |dir| config_dir.join(dir));

    let mut config = CheckConfig::new(output);
    for (name, item) in config_file.checking_maps {
        let resolved = resolve_item(&name, item, config_dir)?;
        config.checking_maps.insert(name, resolved);
    }
    Ok(config)
}

fn resolve_item(name: &str, item: CheckMapItemConfig, config_dir: &Path) -> Result<CheckMapItem> {
    validate_item(name, &item)?;

    let filter =
        GlobFilter::new(&item.include, &item.exclude).map_err(|e| e.in_task(name))?;

    let mut resolved = CheckMapItem::new(resolve_pattern(&item.base, config_dir)).with_filter(filter);
    for (label, dir) in item.correspond {
        resolved = resolved.with_correspond(label, config_dir.join(dir));
    }
    Ok(resolved)
}

fn validate_item(name: &str, item: &CheckMapItemConfig) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FccError::Config(
            "checking_maps: task name cannot be empty".to_string(),
        ));
    }

    if item.base.trim().is_empty() {
        return Err(FccError::Config(format!(
            "checking_maps.{name}.base cannot be empty"
        )));
    }

    for (label, dir) in &item.correspond {
        if label.trim().is_empty() {
            return Err(FccError::Config(format!(
                "checking_maps.{name}.correspond: label cannot be empty"
            )));
        }
        if dir.as_os_str().is_empty() {
            return Err(FccError::Config(format!(
                "checking_maps.{name}.correspond.{label} cannot be empty"
            )));
        }
    }

    Ok(())
}

/// Anchor a relative base pattern at `config_dir`, using `/` separators.
fn resolve_pattern(pattern: &str, config_dir: &Path) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }

    let dir = config_dir.to_string_lossy().replace('\\', "/");
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    format!("{}/{pattern}", dir.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
