//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch() {
    match parse(&["segfetch", "fetch", "format.json", "-o", "video.mp4"]) {
        CliCommand::Fetch {
            format,
            output,
            test,
            retries,
        } => {
            assert_eq!(format, PathBuf::from("format.json"));
            assert_eq!(output, PathBuf::from("video.mp4"));
            assert!(!test);
            assert_eq!(retries, None);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_test_and_retries() {
    match parse(&[
        "segfetch", "fetch", "-", "--output", "out.mp4", "--test", "--retries", "5",
    ]) {
        CliCommand::Fetch {
            format,
            test,
            retries,
            ..
        } => {
            assert_eq!(format, PathBuf::from("-"));
            assert!(test);
            assert_eq!(retries, Some(5));
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_requires_output() {
    assert!(Cli::try_parse_from(["segfetch", "fetch", "format.json"]).is_err());
}

#[test]
fn cli_parse_plan() {
    match parse(&["segfetch", "plan", "format.json", "--test"]) {
        CliCommand::Plan { format, test } => {
            assert_eq!(format, PathBuf::from("format.json"));
            assert!(test);
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["segfetch", "resume"]).is_err());
}
