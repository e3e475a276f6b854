//! Tests for global options and config overrides.

use super::parse_cli;
use std::path::Path;
use urlhelper_core::config::UrlHelperConfig;
use urlhelper_core::UrlHelper;

#[test]
fn cli_parse_global_overrides_after_subcommand() {
    let cli = parse_cli(&[
        "urlhelper",
        "absolute",
        "x",
        "--host",
        "http://example.org/",
        "--base-path",
        "base/url/",
        "--default-scheme",
        "https://",
    ]);
    assert_eq!(cli.host.as_deref(), Some("http://example.org/"));
    assert_eq!(cli.base_path.as_deref(), Some("base/url/"));
    assert_eq!(cli.default_scheme.as_deref(), Some("https://"));
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_config_path() {
    let cli = parse_cli(&["urlhelper", "--config", "/tmp/urlhelper.toml", "config"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/urlhelper.toml")));
}

#[test]
fn overrides_replace_only_given_fields() {
    let cli = parse_cli(&["urlhelper", "--host", "example.org", "relative", "x"]);
    let cfg = cli.apply_overrides(UrlHelperConfig {
        host: "localhost".into(),
        base_path: "/api".into(),
        default_scheme: "https".into(),
    });
    assert_eq!(cfg.host, "example.org");
    assert_eq!(cfg.base_path, "/api");
    assert_eq!(cfg.default_scheme, "https");
}

#[test]
fn overrides_feed_the_builder() {
    let cli = parse_cli(&[
        "urlhelper",
        "--host",
        "http://example.org/",
        "--base-path",
        "base/url/",
        "--default-scheme",
        "https://",
        "absolute",
        "test/url",
    ]);
    let urls = cli.apply_overrides(UrlHelperConfig::default()).builder();
    assert_eq!(
        urls.absolute("test/url", &[]),
        "https://example.org/base/url/test/url"
    );
}

#[test]
fn render_keeps_path_whitespace() {
    let cfg = UrlHelperConfig {
        host: "example.org".into(),
        base_path: String::new(),
        default_scheme: "http".into(),
    };
    let relative = parse_cli(&["urlhelper", "relative", " a "]);
    assert_eq!(relative.render(&cfg).unwrap(), "/ a ");
    let absolute = parse_cli(&["urlhelper", "absolute", "a ", "-q", "k=v "]);
    assert_eq!(
        absolute.render(&cfg).unwrap(),
        "http://example.org/a ?k=v+"
    );
}

#[test]
fn render_config_has_no_trailing_newline() {
    let cli = parse_cli(&["urlhelper", "config"]);
    let out = cli.render(&UrlHelperConfig::default()).unwrap();
    assert!(out.starts_with("host = \"localhost\""));
    assert!(!out.ends_with('\n'));
}
