// tests/cli_args.rs
use clap::Parser;
use itemreport_core::cli::{Cli, Commands};

#[test]
fn test_render_flags() {
    let cli = Cli::try_parse_from([
        "itemreport", "-vv", "render", "--format", "HTML", "--user", "Bo", "--role", "ADMIN", "--summary",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    let Commands::Render(args) = cli.command else {
        panic!("expected render");
    };
    assert_eq!(args.format.as_deref(), Some("HTML"));
    assert_eq!(args.user.as_deref(), Some("Bo"));
    assert_eq!(args.role.as_deref(), Some("ADMIN"));
    assert!(args.summary);
    assert!(args.input.is_none());
}

#[test]
fn test_render_values_are_not_validated_by_parser() {
    let cli = Cli::try_parse_from(["itemreport", "render", "-f", "PDF", "-r", "GUEST"]).unwrap();
    let Commands::Render(args) = cli.command else {
        panic!("expected render");
    };
    assert_eq!(args.format.as_deref(), Some("PDF"));
    assert_eq!(args.role.as_deref(), Some("GUEST"));
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["itemreport"]).is_err());
}

#[test]
fn test_init_force() {
    let cli = Cli::try_parse_from(["itemreport", "init", "--force"]).unwrap();
    assert!(matches!(cli.command, Commands::Init { force: true }));
}
