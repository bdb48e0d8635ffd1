use super::{Cli, Command, SettingsCommand};
use crate::project_identity;
use clap::{CommandFactory, Parser};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn run_requires_a_path() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "run"]);
    assert!(parsed.is_err());
}

#[test]
fn run_parses_overrides() {
    let parsed = Cli::try_parse_from([
        project_identity::BINARY_NAME,
        "run",
        "suites",
        "--filter",
        "context/.*",
        "--timeout",
        "5",
        "--no-fail-fast",
        "--format",
        "json",
    ])
    .expect("run should parse");

    assert_eq!(parsed.global.format.as_deref(), Some("json"));
    match parsed.command {
        Command::Run {
            paths,
            filter,
            timeout,
            no_fail_fast,
            keep_fixtures,
            ..
        } => {
            assert_eq!(paths.len(), 1);
            assert_eq!(filter.as_deref(), Some("context/.*"));
            assert_eq!(timeout, Some(5));
            assert!(no_fail_fast);
            assert!(!keep_fixtures);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn format_rejects_unknown_values() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "matrix", "--format", "xml"]);
    assert!(parsed.is_err());
}

#[test]
fn verbose_and_quiet_conflict() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "-v", "-q", "versions"]);
    assert!(parsed.is_err());
}

#[test]
fn settings_set_parses_key_and_value() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "settings", "set", "timeout", "30"])
        .expect("settings set should parse");
    match parsed.command {
        Command::Settings {
            command: SettingsCommand::Set { key, value },
        } => {
            assert_eq!(key, "timeout");
            assert_eq!(value, "30");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
