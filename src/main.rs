use clap::Parser;

use file_consistency_checker::cli::{Cli, Commands};
use file_consistency_checker::commands::{run_check, run_init};
use file_consistency_checker::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let exit_code = match &cli.command {
        Commands::Init(args) => run_init(args, cli.color.into()),
        Commands::Check(args) => run_check(args, &cli),
    };

    std::process::exit(exit_code);
}
