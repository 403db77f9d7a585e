use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Bounds on remote calls made during a resolution pass (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upper bound for one metadata (oEmbed) endpoint call, in milliseconds.
    pub oembed_ms: u64,
    /// Upper bound for one short-link expansion, in milliseconds.
    pub redirect_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            oembed_ms: 4000,
            redirect_ms: 3000,
        }
    }
}

impl TimeoutConfig {
    pub fn oembed(&self) -> Duration {
        Duration::from_millis(self.oembed_ms)
    }

    pub fn redirect(&self) -> Duration {
        Duration::from_millis(self.redirect_ms)
    }
}

/// Metadata endpoints queried by the remote resolvers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EndpointConfig {
    /// oEmbed endpoint of the audio host.
    pub soundcloud_oembed: String,
    /// Multi-provider oEmbed endpoint used as the generic fallback.
    pub generic_oembed: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            soundcloud_oembed: "https://soundcloud.com/oembed".to_string(),
            generic_oembed: "https://noembed.com/embed".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/clipembed/config.toml`.
///
/// The three policy flags are tri-state: a missing key means "use the default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipembedConfig {
    /// Move existing block content into a child before overwriting (default on).
    #[serde(default)]
    pub preserve_original: Option<bool>,
    /// Allow lookups against third-party oEmbed endpoints (default off).
    #[serde(default)]
    pub allow_oembed: Option<bool>,
    /// Allow those lookups while resolving a multi-URL batch (default off).
    #[serde(default)]
    pub allow_oembed_in_batch: Option<bool>,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipembed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClipembedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClipembedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path (no default file is created).
pub fn load_from_path(path: &Path) -> Result<ClipembedConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ClipembedConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
