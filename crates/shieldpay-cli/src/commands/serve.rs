//! Serve command - run the HTTP extraction endpoint.

use std::net::IpAddr;

use clap::Args;
use tokio::net::TcpListener;
use tracing::{info, warn};

use shieldpay_core::models::ServerConfig;
use shieldpay_core::ExtractionPipeline;

use crate::server::{self, AppState};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Listening port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<IpAddr>,

    /// Reject request bodies larger than this many bytes
    #[arg(long)]
    max_upload_bytes: Option<usize>,
}

impl ServeArgs {
    /// Command-line flags win over the config file and `PORT`.
    fn apply(&self, server: &mut ServerConfig) {
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(bind) = self.bind {
            server.bind_address = bind;
        }
        if let Some(limit) = self.max_upload_bytes {
            server.max_upload_bytes = Some(limit);
        }
    }
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    args.apply(&mut config.server);

    let state = AppState {
        pipeline: ExtractionPipeline::pdf(config.pdf.clone()),
    };
    let app = server::router(state, config.server.max_upload_bytes);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("ShieldPay extractor listening on port {}", config.server.port);
    match config.server.max_upload_bytes {
        Some(limit) => info!("Upload limit: {} bytes", limit),
        None => info!("Upload limit: none"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use shieldpay_core::ShieldpayConfig;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn serve_args(args: &[&str]) -> ServeArgs {
        TestCli::try_parse_from(std::iter::once("serve").chain(args.iter().copied()))
            .unwrap()
            .serve
    }

    fn configured() -> ShieldpayConfig {
        let mut config: ShieldpayConfig =
            serde_json::from_str(r#"{ "server": { "port": 9090, "max_upload_bytes": 1024 } }"#)
                .unwrap();
        config.apply_port_var(Some("3001")).unwrap();
        config
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = configured();
        serve_args(&[]).apply(&mut config.server);

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.bind_address.to_string(), "0.0.0.0");
        assert_eq!(config.server.max_upload_bytes, Some(1024));
    }

    #[test]
    fn test_flags_override_env_and_file() {
        let mut config = configured();
        serve_args(&["--port", "4000", "--bind", "127.0.0.1", "--max-upload-bytes", "2048"])
            .apply(&mut config.server);

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:4000");
        assert_eq!(config.server.max_upload_bytes, Some(2048));
    }

    #[test]
    fn test_invalid_bind_rejected() {
        assert!(TestCli::try_parse_from(["serve", "--bind", "localhost"]).is_err());
    }
}
