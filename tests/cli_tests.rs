use clap::Parser;
use searchdeck::cli::{Cli, Commands};
use searchdeck::runtime::modes::{Mode, detect_mode};
use searchdeck::system::RunMode;

#[test]
fn test_no_arguments() {
    let cli = Cli::try_parse_from(["searchdeck"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
    assert!(cli.catalog.is_none());
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "searchdeck",
        "list",
        "DNS",
        "Servers",
        "--catalog",
        "links.json",
        "-c",
        "custom.toml",
    ])
    .unwrap();

    assert_eq!(cli.catalog.as_deref(), Some("links.json"));
    assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    assert_eq!(
        cli.command,
        Some(Commands::List {
            categories: vec!["DNS".to_string(), "Servers".to_string()]
        })
    );
}

#[test]
fn test_config_gen_defaults() {
    let cli = Cli::try_parse_from(["searchdeck", "config-gen"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::ConfigGen {
            output: "searchdeck.example.toml".to_string(),
            force: false,
        })
    );

    let cli = Cli::try_parse_from(["searchdeck", "config-gen", "out.toml", "--force"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::ConfigGen {
            output: "out.toml".to_string(),
            force: true,
        })
    );
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["searchdeck", "serve"]).is_err());
}

#[test]
fn test_list_routes_to_cli_mode() {
    let cli = Cli::try_parse_from(["searchdeck", "list"]).unwrap();
    let mode = detect_mode(cli.command);
    assert_eq!(mode.run_mode(), RunMode::Cli);
    assert!(matches!(mode, Mode::Cli(Commands::List { .. })));
}

#[cfg(feature = "tui")]
#[test]
fn test_tui_is_the_default_mode() {
    let cli = Cli::try_parse_from(["searchdeck"]).unwrap();
    assert_eq!(detect_mode(cli.command), Mode::Tui);

    let cli = Cli::try_parse_from(["searchdeck", "tui"]).unwrap();
    assert_eq!(detect_mode(cli.command), Mode::Tui);
}
