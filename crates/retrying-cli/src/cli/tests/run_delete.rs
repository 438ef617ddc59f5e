//! Tests for run and delete subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand, RetryArgs};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_run_after_double_dash() {
    match parse(&["retrying", "run", "--", "curl", "-f", "https://example.com"]) {
        CliCommand::Run { retry, command } => {
            assert_eq!(retry, RetryArgs::default());
            assert_eq!(command, vec!["curl", "-f", "https://example.com"]);
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_with_retry_flags() {
    match parse(&[
        "retrying",
        "run",
        "--max-retries",
        "3",
        "--init-delay-us",
        "0",
        "--",
        "make",
        "test",
    ]) {
        CliCommand::Run { retry, command } => {
            assert_eq!(retry.max_retries, Some(3));
            assert_eq!(retry.init_delay_us, Some(0));
            assert_eq!(retry.max_delay_us, None);
            assert_eq!(command, vec!["make", "test"]);
        }
        _ => panic!("expected Run with flags"),
    }
}

#[test]
fn cli_parse_run_requires_program() {
    assert!(Cli::try_parse_from(["retrying", "run"]).is_err());
}

#[test]
fn cli_parse_delete() {
    match parse(&["retrying", "delete", "a.txt", "b.txt"]) {
        CliCommand::Delete {
            retry,
            recursive,
            paths,
        } => {
            assert_eq!(retry, RetryArgs::default());
            assert!(!recursive);
            assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        }
        _ => panic!("expected Delete"),
    }
}

#[test]
fn cli_parse_delete_recursive() {
    match parse(&["retrying", "delete", "-r", "--max-delay-us", "5000", "build"]) {
        CliCommand::Delete {
            retry,
            recursive,
            paths,
        } => {
            assert!(recursive);
            assert_eq!(retry.max_delay_us, Some(5000));
            assert_eq!(paths, vec![PathBuf::from("build")]);
        }
        _ => panic!("expected Delete with -r"),
    }
}
