//! CLI parse tests.

use super::Cli;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url_positional() {
    let cli = parse(&["dashprof", "https://dash.example/security?host=a"]);
    assert_eq!(
        cli.url.as_deref(),
        Some("https://dash.example/security?host=a")
    );
    assert!(!cli.json);
}

#[test]
fn cli_parse_no_url_prompts_later() {
    let cli = parse(&["dashprof"]);
    assert!(cli.url.is_none());
    assert!(!cli.json);
}

#[test]
fn cli_parse_json_flag() {
    let cli = parse(&["dashprof", "--json", "https://dash.example/x"]);
    assert!(cli.json);
    assert_eq!(cli.url.as_deref(), Some("https://dash.example/x"));
}

#[test]
fn cli_rejects_extra_positionals() {
    assert!(Cli::try_parse_from(["dashprof", "one", "two"]).is_err());
}
