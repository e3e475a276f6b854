//! Tests for relative, absolute, scheme and config subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_relative() {
    match parse(&["urlhelper", "relative", "test/url"]) {
        CliCommand::Relative { path, query } => {
            assert_eq!(path, "test/url");
            assert!(query.is_empty());
        }
        _ => panic!("expected Relative"),
    }
}

#[test]
fn cli_parse_relative_with_query() {
    match parse(&[
        "urlhelper",
        "relative",
        "test/url",
        "-q",
        "foo=bar",
        "--query",
        "foo=baz",
    ]) {
        CliCommand::Relative { query, .. } => {
            assert_eq!(
                query,
                vec![
                    ("foo".to_string(), "bar".to_string()),
                    ("foo".to_string(), "baz".to_string()),
                ]
            );
        }
        _ => panic!("expected Relative"),
    }
}

#[test]
fn cli_parse_query_value_keeps_later_equals() {
    match parse(&["urlhelper", "absolute", "x", "-q", "next=/a?b=c"]) {
        CliCommand::Absolute { path, query } => {
            assert_eq!(path, "x");
            assert_eq!(query, vec![("next".to_string(), "/a?b=c".to_string())]);
        }
        _ => panic!("expected Absolute"),
    }
}

#[test]
fn cli_parse_scheme() {
    match parse(&["urlhelper", "scheme", "test/url", "ftp"]) {
        CliCommand::Scheme {
            path,
            scheme,
            query,
        } => {
            assert_eq!(path, "test/url");
            assert_eq!(scheme, "ftp");
            assert!(query.is_empty());
        }
        _ => panic!("expected Scheme"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["urlhelper", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_rejects_query_without_equals() {
    assert!(Cli::try_parse_from(["urlhelper", "relative", "x", "-q", "novalue"]).is_err());
}

#[test]
fn cli_scheme_requires_scheme_argument() {
    assert!(Cli::try_parse_from(["urlhelper", "scheme", "x"]).is_err());
}
