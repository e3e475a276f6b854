//! `urlhelper config` – print the effective configuration.

use anyhow::Result;
use urlhelper_core::config::UrlHelperConfig;

pub fn run_show_config(cfg: &UrlHelperConfig) -> Result<String> {
    let toml = toml::to_string_pretty(cfg)?;
    Ok(toml.trim_end().to_string())
}
