use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::transport::{TransportConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default worker count for bulk downloads.
pub const DEFAULT_DOWNLOAD_THREADS: usize = 10;

/// Global configuration loaded from `~/.config/dds/config.toml`.
///
/// These are the knobs that would otherwise be hidden literals: the
/// download pool size, the transport timeout, and the client identity
/// presented to remote servers. CLI flags override them per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DdsConfig {
    /// Worker threads for bulk result downloads.
    pub download_threads: usize,
    /// Network timeout in seconds for every HTTP request.
    pub timeout_secs: u64,
    /// User-Agent presented to search endpoints and fetched resources.
    pub user_agent: String,
    /// Default search region (e.g. "wt-wt", "us-en").
    pub region: String,
    /// Optional proxy for all requests ("tb" is an alias for the local
    /// Tor endpoint, socks5://127.0.0.1:9150).
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for DdsConfig {
    fn default() -> Self {
        Self {
            download_threads: DEFAULT_DOWNLOAD_THREADS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            region: "wt-wt".to_string(),
            proxy: None,
        }
    }
}

impl DdsConfig {
    /// Builds the transport shared by every request of one command.
    /// `proxy` (already alias-expanded by the caller) overrides the
    /// configured one; `verify_tls` comes straight from the CLI.
    pub fn transport(&self, proxy: Option<String>, verify_tls: bool) -> TransportConfig {
        TransportConfig {
            proxy: proxy.or_else(|| self.proxy.clone()),
            timeout: Duration::from_secs(self.timeout_secs),
            verify_tls,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dds")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DdsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DdsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DdsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
