use crate::checker::CheckOrchestrator;
use crate::cli::{CheckArgs, Cli};
use crate::config::{CheckConfig, ConfigLoader, FileConfigLoader};
use crate::output::{
    ColorMode, HashProgress, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
    print_error,
};
use crate::report::{CheckSummary, ReportStore, compare_reports, summarize};
use crate::{EXIT_DRIFT_DETECTED, EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(cli.color.into(), &e);
            EXIT_ERROR
        }
    }
}

/// Runs a check and prints its summary.
///
/// # Errors
/// Returns an error if the configuration is invalid, a file cannot be hashed,
/// or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let config = FileConfigLoader::new().load_from_path(&args.config)?;

    // 2. Hash, persist and summarize
    let progress = HashProgress::new(cli.quiet);
    let result = execute_check(&config, progress.clone());
    progress.finish();
    let summary = result?;

    // 3. Print summary
    if !cli.quiet {
        let color: ColorMode = cli.color.into();
        let output = match args.format {
            OutputFormat::Text => TextFormatter::with_verbose(color, cli.verbose).format(&summary)?,
            OutputFormat::Json => JsonFormatter.format(&summary)?,
        };
        print!("{output}");
        if args.format == OutputFormat::Json {
            println!();
        }
    }

    Ok(if args.strict && summary.has_drift() {
        EXIT_DRIFT_DETECTED
    } else {
        EXIT_SUCCESS
    })
}

/// Evaluates every task, replaces the stored report and summarizes the result.
///
/// Nothing is written when evaluation fails.
///
/// # Errors
/// Returns an error if any task fails or the report cannot be written.
pub fn execute_check(config: &CheckConfig, progress: HashProgress) -> Result<CheckSummary> {
    let store = ReportStore::new(config.output.clone());
    let previous = store.load();

    let report = CheckOrchestrator::with_progress(progress).run(config)?;
    store.save(&report)?;
    tracing::info!(
        path = %store.path().display(),
        tasks = report.len(),
        files = report.file_count(),
        "report written"
    );

    let summary = summarize(&report);
    Ok(match previous {
        Some(previous) => summary.with_changes(compare_reports(&previous, &report)),
        None => summary,
    })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
