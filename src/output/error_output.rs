//! Colored error lines on stderr.
//!
//! Format: `✖ {error_type}: {message}` followed by an optional `  × {detail}` line.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    pub fn print_error(&self, error_type: &str, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail);
    }

    /// Writes an error to `w`.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
    ) {
        // Write failures on the error stream are ignored.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

/// Print `error` to stderr with its category and detail.
pub fn print_error(mode: ColorMode, error: &crate::FccError) {
    let detail = error.detail();
    ErrorOutput::new(mode).print_error(error.error_type(), &error.to_string(), detail.as_deref());
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
