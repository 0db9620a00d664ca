use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content_disposition::ContentDisposition;
use crate::download_auth::DEFAULT_VALID_DURATION_SECS;
use crate::error::{MAX_VALID_DURATION_SECS, MIN_VALID_DURATION_SECS};

/// Global configuration loaded from `~/.config/b2auth/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2AuthConfig {
    /// Validity used for requests that do not pass `--duration`.
    pub default_valid_duration_secs: i64,
    /// Refuse Content-Disposition overrides with parameter continuations
    /// (`filename*=...`) before they reach the service.
    #[serde(default)]
    pub reject_parameter_continuations: bool,
    /// Override applied to requests that do not pass `--disposition`.
    #[serde(default)]
    pub default_content_disposition: Option<String>,
}

impl Default for B2AuthConfig {
    fn default() -> Self {
        Self {
            default_valid_duration_secs: DEFAULT_VALID_DURATION_SECS,
            reject_parameter_continuations: false,
            default_content_disposition: None,
        }
    }
}

impl B2AuthConfig {
    /// Checks values that would otherwise only fail when a request is built.
    pub fn validate(&self) -> Result<()> {
        let d = self.default_valid_duration_secs;
        if !(MIN_VALID_DURATION_SECS..=MAX_VALID_DURATION_SECS).contains(&d) {
            anyhow::bail!(
                "default_valid_duration_secs = {} must be between {} and {}",
                d,
                MIN_VALID_DURATION_SECS,
                MAX_VALID_DURATION_SECS
            );
        }
        if let Some(raw) = &self.default_content_disposition {
            let cd = ContentDisposition::parse(raw).context("default_content_disposition")?;
            if self.reject_parameter_continuations {
                cd.reject_parameter_continuations()
                    .context("default_content_disposition")?;
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("b2auth")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<B2AuthConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = B2AuthConfig::default();
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

/// Load and validate a specific config file.
pub fn load_from(path: &Path) -> Result<B2AuthConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: B2AuthConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
