use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/maplegend/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendConfig {
    /// Seconds allowed for establishing the connection to the map service.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole legend request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// HTTP proxy, e.g. `http://proxy.internal:3128`. Used only when `proxy_enabled`.
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default)]
    pub proxy_enabled: bool,
    /// Optional `User-Agent` header sent with legend requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            proxy_url: None,
            proxy_enabled: false,
            user_agent: None,
        }
    }
}

impl LegendConfig {
    /// Proxy URL to use, if the proxy is enabled and configured.
    pub fn effective_proxy(&self) -> Option<&str> {
        if !self.proxy_enabled {
            return None;
        }
        self.proxy_url
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("maplegend")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LegendConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LegendConfig::default();
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

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<LegendConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LegendConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
