use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["fcc", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, PathBuf::from("fcc.toml"));
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.strict);
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_options() {
    let cli = Cli::parse_from([
        "fcc",
        "check",
        "-c",
        "conf/custom.toml",
        "--format",
        "json",
        "--strict",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, PathBuf::from("conf/custom.toml"));
            assert_eq!(args.format, OutputFormat::Json);
            assert!(args.strict);
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["fcc", "check", "--format", "sarif"]).is_err());
}

#[test]
fn cli_init_default_path() {
    let cli = Cli::parse_from(["fcc", "init"]);
    match cli.command {
        Commands::Init(args) => assert_eq!(args.config, PathBuf::from("fcc.toml")),
        Commands::Check(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_custom_path() {
    let cli = Cli::parse_from(["fcc", "init", "--config", "other.toml"]);
    match cli.command {
        Commands::Init(args) => assert_eq!(args.config, PathBuf::from("other.toml")),
        Commands::Check(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["fcc", "check", "-vv", "--color", "never"]);

    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
}

#[test]
fn cli_quiet_flag() {
    let cli = Cli::parse_from(["fcc", "-q", "init"]);

    assert!(cli.quiet);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["fcc"]).is_err());
}

#[test]
fn color_choice_converts_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}
