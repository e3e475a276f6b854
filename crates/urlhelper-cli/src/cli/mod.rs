//! CLI for generating URLs from the command line.

mod commands;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlhelper_core::config::{self, UrlHelperConfig};

use commands::{run_absolute, run_relative, run_scheme, run_show_config};

/// Top-level CLI for urlhelper.
#[derive(Debug, Parser)]
#[command(name = "urlhelper")]
#[command(about = "Generate root-relative and absolute URLs for a configured host", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/urlhelper/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the configured host (may include a scheme, e.g. http://example.org).
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Override the configured base path.
    #[arg(long, global = true)]
    pub base_path: Option<String>,

    /// Override the configured default scheme.
    #[arg(long, global = true)]
    pub default_scheme: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print a root-relative URL.
    Relative {
        /// Path below the base path.
        path: String,
        /// Query parameter; repeat a key to give it several values.
        #[arg(short = 'q', long = "query", value_name = "KEY=VALUE", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },

    /// Print an absolute URL with the default scheme.
    Absolute {
        /// Path below the base path.
        path: String,
        /// Query parameter; repeat a key to give it several values.
        #[arg(short = 'q', long = "query", value_name = "KEY=VALUE", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },

    /// Print an absolute URL with an explicit scheme.
    Scheme {
        /// Path below the base path.
        path: String,
        /// Scheme to use, with or without the trailing "://".
        scheme: String,
        /// Query parameter; repeat a key to give it several values.
        #[arg(short = 'q', long = "query", value_name = "KEY=VALUE", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },

    /// Print the effective configuration as TOML.
    Config,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.effective_config()?;
        tracing::debug!("effective config: {:?}", cfg);
        println!("{}", cli.render(&cfg)?);
        Ok(())
    }

    /// Output of the selected subcommand, printed as-is.
    fn render(&self, cfg: &UrlHelperConfig) -> Result<String> {
        let urls = cfg.builder();
        let output = match &self.command {
            CliCommand::Relative { path, query } => run_relative(&urls, path, query),
            CliCommand::Absolute { path, query } => run_absolute(&urls, path, query),
            CliCommand::Scheme {
                path,
                scheme,
                query,
            } => run_scheme(&urls, path, scheme, query),
            CliCommand::Config => run_show_config(cfg)?,
        };
        Ok(output)
    }

    /// Config file (explicit or XDG default) with command-line overrides applied.
    fn effective_config(&self) -> Result<UrlHelperConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => config::load_or_init()?,
        };
        Ok(self.apply_overrides(cfg))
    }

    fn apply_overrides(&self, mut cfg: UrlHelperConfig) -> UrlHelperConfig {
        if let Some(host) = &self.host {
            cfg.host = host.clone();
        }
        if let Some(base_path) = &self.base_path {
            cfg.base_path = base_path.clone();
        }
        if let Some(default_scheme) = &self.default_scheme {
            cfg.default_scheme = default_scheme.clone();
        }
        cfg
    }
}

/// Splits a `-q key=value` argument on the first `=`. The value may be empty.
fn parse_query_pair(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("invalid query parameter {arg:?}: expected KEY=VALUE"),
    }
}

#[cfg(test)]
mod tests;
