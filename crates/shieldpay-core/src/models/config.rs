//! Configuration structures for the extractor service.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{Result, ShieldpayError};

/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Main configuration for the shieldpay service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldpayConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind_address: IpAddr,

    /// Listening port.
    pub port: u16,

    /// Upper bound on the request body in bytes (None = unlimited).
    pub max_upload_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_upload_bytes: None,
        }
    }
}

impl ServerConfig {
    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty user password on encrypted documents.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
        }
    }
}

impl ShieldpayConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ShieldpayError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ShieldpayError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_port_var(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Apply a `PORT` value. Empty or absent values leave the port unchanged.
    pub fn apply_port_var(&mut self, value: Option<&str>) -> Result<()> {
        match value.map(str::trim) {
            None | Some("") => Ok(()),
            Some(raw) => {
                self.server.port = raw.parse().map_err(|_| {
                    ShieldpayError::Config(format!("invalid {PORT_ENV} value: {raw:?}"))
                })?;
                Ok(())
            }
        }
    }
}
