use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::output::{ColorMode, print_error};
use crate::{EXIT_ERROR, EXIT_SUCCESS, FccError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs, color: ColorMode) -> i32 {
    match run_init_impl(&args.config) {
        Ok(()) => {
            println!("Created configuration file: {}", args.config.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(color, &e);
            EXIT_ERROR
        }
    }
}

/// Writes a starter configuration file to `path`.
///
/// # Errors
/// Returns an error if the file already exists or cannot be written. Parent
/// directories are not created.
pub fn run_init_impl(path: &Path) -> Result<()> {
    let write_error = |source| FccError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    // create_new fails on any existing entry, dangling links included.
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(FccError::Config(format!(
                "Configuration file already exists: {}",
                path.display()
            )));
        }
        Err(e) => return Err(write_error(e)),
    };

    file.write_all(generate_config_template().as_bytes())
        .map_err(write_error)?;
    tracing::info!(path = %path.display(), "wrote configuration template");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# fcc configuration file
#
# Each entry under [checking_maps] is a task. Every file matched by `base` is
# hashed and compared with the file at the same relative path in each
# `correspond` directory. Relative paths are resolved against this file's
# directory.

# Directory for fcc-report.json (default: the directory containing this file)
# output = "."

[checking_maps]

# [checking_maps.docs]
# base = "docs/**/*.md"
#
# Only check paths (relative to the base root) matching these globs
# include = ["**/*.md"]
#
# Then skip paths matching these globs
# exclude = ["drafts/**"]
#
# [checking_maps.docs.correspond]
# mirror = "site/docs"
# backup = "../backup/docs"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
