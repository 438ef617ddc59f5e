use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::retry::RetryConfig;

/// Global configuration loaded from `~/.config/retrying/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl AppConfig {
    /// The retry config in effect: the `[retry]` section, or defaults.
    pub fn retry_config(&self) -> RetryConfig {
        self.retry.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retrying")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppConfig {
            retry: Some(RetryConfig::default()),
        };
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    if let Some(retry) = &cfg.retry {
        retry
            .validate()
            .with_context(|| format!("invalid [retry] section in {}", path.display()))?;
    }
    Ok(cfg)
}
