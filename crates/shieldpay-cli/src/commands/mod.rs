//! CLI command implementations.

pub mod config;
pub mod extract;
pub mod serve;

use std::path::{Path, PathBuf};

use shieldpay_core::ShieldpayConfig;
use tracing::debug;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shieldpay")
        .join("config.json")
}

/// Load configuration: explicit file, else the default file if present,
/// else built-in defaults. Environment overrides are applied last.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ShieldpayConfig> {
    let mut config = match config_path {
        Some(path) => ShieldpayConfig::from_file(Path::new(path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                debug!("Loading config from {}", path.display());
                ShieldpayConfig::from_file(&path)?
            } else {
                ShieldpayConfig::default()
            }
        }
    };

    config.apply_env()?;
    Ok(config)
}
