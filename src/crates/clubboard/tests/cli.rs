use clap::Parser;
use clubboard::cli::{Cli, Commands, OutputFormat};
use clubboard::Layout;

#[test]
fn test_no_subcommand_means_watch() {
    let cli = Cli::try_parse_from(["clubboard"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
}

#[test]
fn test_watch_overrides() {
    let cli = Cli::try_parse_from([
        "clubboard",
        "watch",
        "--layout",
        "cards",
        "--interval-ms",
        "5000",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::Watch {
            layout: Some(Layout::Cards),
            interval_ms: Some(5000),
        })
    );
}

#[test]
fn test_show_format() {
    let cli = Cli::try_parse_from(["clubboard", "show", "--format", "json"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Show {
            format: OutputFormat::Json,
            json: false,
        })
    );

    let cli = Cli::try_parse_from(["clubboard", "show", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Show { json: true, .. })));

    let cli = Cli::try_parse_from(["clubboard", "show"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Show {
            format: OutputFormat::Table,
            json: false,
        })
    );

    assert!(Cli::try_parse_from(["clubboard", "show", "--format", "yaml"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["clubboard", "show", "--api-key", "abc", "-v"]).unwrap();
    assert_eq!(cli.api_key.as_deref(), Some("abc"));
    assert!(cli.verbose);
}

#[test]
fn test_init_force() {
    let cli = Cli::try_parse_from(["clubboard", "init", "--force"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Init { force: true }));
}

#[test]
fn test_unknown_layout_is_rejected() {
    assert!(Cli::try_parse_from(["clubboard", "watch", "--layout", "grid"]).is_err());
}
