use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use curator::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["curator", "scan"],
        vec!["curator", "scan", "--format", "json"],
        vec!["curator", "validate"],
        vec!["curator", "validate", "--strict", "--format", "json"],
        vec!["curator", "status", "--content-only"],
        vec!["curator", "status", "--collections-only", "--format", "json"],
        vec!["curator", "list"],
        vec!["curator", "list", "prompts"],
        vec!["curator", "list", "collections", "--tag", "starter"],
        vec!["curator", "show", "prompts/explain-code.prompt.md"],
        vec!["curator", "show", "core", "--format", "json"],
        vec!["curator", "collection", "list"],
        vec!["curator", "collection", "show", "core"],
        vec!["curator", "collection", "validate", "--all"],
        vec!["curator", "collection", "validate", "core"],
        vec![
            "curator",
            "new",
            "prompt",
            "explain-code",
            "--description",
            "Explain the selected code",
            "--non-interactive",
        ],
        vec![
            "curator",
            "new",
            "instruction",
            "python-style",
            "--description",
            "Python rules",
            "--apply-to",
            "**/*.py",
            "--non-interactive",
        ],
        vec![
            "curator",
            "new",
            "agent",
            "data-engineer",
            "--description",
            "Pipelines",
            "--tool",
            "search",
            "--tool",
            "codebase",
            "--non-interactive",
        ],
        vec!["curator", "init"],
        vec!["curator", "init", "--list"],
        vec!["curator", "init", "--force"],
        vec![
            "curator",
            "watch",
            "--debounce-ms",
            "120",
            "--batch-window-ms",
            "80",
        ],
        vec!["curator", "ci"],
        vec!["curator", "ci", "--strict", "--report", "out.json"],
        vec!["curator", "--library", "/tmp/lib", "validate"],
        vec!["curator", "--log-level", "debug", "scan"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_flags_and_missing_args() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["curator", "validate", "--fast"],
        vec!["curator", "new", "prompt"],
        vec!["curator", "collection", "show"],
        vec!["curator", "watch", "--debounce-ms", "soon"],
        vec!["curator", "list", "prompts", "extra"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_err(), "expected parse failure for args: {args:?}");
    }
}

#[test]
fn defaults_are_applied() {
    let cli = Cli::try_parse_from(["curator", "validate"]).unwrap();
    assert_eq!(cli.library, PathBuf::from("."));
    assert!(cli.config.is_none());

    match cli.command {
        Commands::Validate { format, strict } => {
            assert_eq!(format, "text");
            assert!(!strict);
        }
        _ => panic!("expected validate command"),
    }
}

#[test]
fn list_target_defaults_to_all() {
    let cli = Cli::try_parse_from(["curator", "list"]).unwrap();
    match cli.command {
        Commands::List {
            target,
            format,
            tag,
        } => {
            assert_eq!(target, "all");
            assert_eq!(format, "text");
            assert!(tag.is_none());
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn watch_windows_parse_as_millis() {
    let cli = Cli::try_parse_from(["curator", "watch", "--debounce-ms", "250"]).unwrap();
    match cli.command {
        Commands::Watch {
            debounce_ms,
            batch_window_ms,
        } => {
            assert_eq!(debounce_ms, 250);
            assert_eq!(batch_window_ms, 50);
        }
        _ => panic!("expected watch command"),
    }
}

#[test]
fn repeated_tool_flags_accumulate() {
    let cli = Cli::try_parse_from([
        "curator",
        "new",
        "agent",
        "helper",
        "--tool",
        "search",
        "--tool",
        "codebase",
    ])
    .unwrap();

    match cli.command {
        Commands::New { kind, name, tools, .. } => {
            assert_eq!(kind, "agent");
            assert_eq!(name, "helper");
            assert_eq!(tools, vec!["search", "codebase"]);
        }
        _ => panic!("expected new command"),
    }
}

#[test]
fn top_level_help_lists_every_command() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for token in [
        "scan",
        "validate",
        "status",
        "list",
        "show",
        "collection",
        "new",
        "init",
        "watch",
        "ci",
        "--library",
        "--config",
        "--log-level",
    ] {
        assert!(output.contains(token), "help output should mention '{token}'");
    }
}

#[test]
fn new_help_lists_scaffold_flags() {
    let mut command = Cli::command();
    let new = command
        .find_subcommand_mut("new")
        .expect("new subcommand should exist");

    let mut output = Vec::new();
    new.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for token in [
        "--description",
        "--agent",
        "--apply-to",
        "--tool",
        "--force",
        "--non-interactive",
    ] {
        assert!(output.contains(token), "new help should mention '{token}'");
    }
}
