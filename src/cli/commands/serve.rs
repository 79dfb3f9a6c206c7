//! Implementation of the `medchat serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::http::ChatHttpServer;
use crate::infrastructure::logging::LoggerImpl;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Path to a YAML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Disable remote model calls
    #[arg(long)]
    pub offline: bool,
}

/// Apply `--host`/`--port` and validate the result again.
fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    ConfigLoader::validate(config).context("Invalid server override")?;
    Ok(())
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args.host, args.port)?;

    let _logger = LoggerImpl::init(&config.logging)?;

    let pipeline = Arc::new(super::build_pipeline(&config, args.offline)?);
    info!(
        endpoints = pipeline.endpoint_count(),
        offline = args.offline,
        "reply pipeline ready"
    );

    ChatHttpServer::new(pipeline, config.server.clone())
        .serve_with_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Chat HTTP server failed")
}
