use crate::retry::RetryPolicy;
use crate::session::{SessionSettings, DEFAULT_PROXY};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per call (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.5 = 500ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_secs: 0.5,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: Duration::from_secs_f64(self.base_delay_secs.max(0.0)),
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/ytbs/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtbsConfig {
    /// Proxy every engine is pointed at.
    pub proxy: String,
    /// yt-dlp executable.
    pub yt_dlp_binary: String,
    /// Rebuild the engine before each retry.
    pub reinitialize_on_retry: bool,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for YtbsConfig {
    fn default() -> Self {
        Self {
            proxy: DEFAULT_PROXY.to_string(),
            yt_dlp_binary: "yt-dlp".to_string(),
            reinitialize_on_retry: true,
            retry: None,
        }
    }
}

impl YtbsConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            proxy: self.proxy.clone(),
            retry: self.retry.clone().unwrap_or_default().to_policy(),
            reinitialize_on_retry: self.reinitialize_on_retry,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytbs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YtbsConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<YtbsConfig> {
    if !path.exists() {
        let default_cfg = YtbsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: YtbsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
