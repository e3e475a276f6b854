use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::UrlBuilder;
use crate::error::{Error, Result};

/// Builder settings loaded from `~/.config/urlhelper/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlHelperConfig {
    /// Host name, optionally with a scheme prefix (`http://example.org`).
    pub host: String,
    /// Path prefix prepended to every generated URL. Empty for none.
    #[serde(default)]
    pub base_path: String,
    /// Scheme used by absolute URLs when no override is given.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
}

fn default_scheme() -> String {
    "http".to_string()
}

impl Default for UrlHelperConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            base_path: String::new(),
            default_scheme: default_scheme(),
        }
    }
}

impl UrlHelperConfig {
    pub fn builder(&self) -> UrlBuilder {
        UrlBuilder::from(self)
    }
}

impl From<&UrlHelperConfig> for UrlBuilder {
    fn from(cfg: &UrlHelperConfig) -> Self {
        UrlBuilder::new(
            cfg.host.as_str(),
            cfg.base_path.as_str(),
            cfg.default_scheme.as_str(),
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlhelper")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| Error::Io {
            path: PathBuf::from("config.toml"),
            source,
        })
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlHelperConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlHelperConfig> {
    if !path.exists() {
        let default_cfg = UrlHelperConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, toml).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Read and parse a config file; a missing file is an error.
pub fn load_from(path: &Path) -> Result<UrlHelperConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: UrlHelperConfig = toml::from_str(&data).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
