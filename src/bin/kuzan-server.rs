// ABOUTME: Server binary for the Kuzan roadmap API
// ABOUTME: Loads configuration from the environment, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Kuzan Server Binary
//!
//! Starts the roadmap API backed by the configured document store and the
//! external pose analysis service.

use anyhow::Result;
use clap::Parser;
use kuzan::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "kuzan-server")]
#[command(about = "Kuzan - calisthenics skill roadmaps with pose-scored progression")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Kuzan server");
    info!("{}", config.summary());

    let port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(config).await?);

    display_available_endpoints(port);

    if let Err(e) = server::run(resources, port).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Health:          GET  http://{host}:{port}/health");
    info!("   Readiness:       GET  http://{host}:{port}/ready");
    info!("   Selected Track:  GET  http://{host}:{port}/track");
    info!("   Select Track:    PUT  http://{host}:{port}/track");
    info!("   Roadmap:         GET  http://{host}:{port}/roadmaps/{{track}}");
    info!("   Summary:         GET  http://{host}:{port}/roadmaps/{{track}}/summary");
    info!("   Record Score:    POST http://{host}:{port}/roadmaps/{{track}}/skills/{{skill}}/attempts");
    info!("   Analyze Photo:   POST http://{host}:{port}/roadmaps/{{track}}/skills/{{skill}}/analyze");
    info!("=== End of Endpoint List ===");
}
