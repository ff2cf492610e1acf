use std::io::IsTerminal;

use tracing_subscriber::filter::LevelFilter;

/// Map the `-q`/`-v` flags to a maximum log level.
///
/// Warnings are shown by default; `-v` adds info, `-vv` and above add debug.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install a compact fmt subscriber writing to stderr.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: u8, quiet: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none())
        .with_target(verbose >= 2)
        .without_time()
        .compact()
        .try_init()
}
