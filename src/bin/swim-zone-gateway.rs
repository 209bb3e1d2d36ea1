// ABOUTME: Swim zone gateway server binary
// ABOUTME: Loads configuration, initializes logging and serves the zone detection API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Swim Zone Gateway Binary
//!
//! Starts the HTTP gateway that classifies swim sessions into training zones.

use anyhow::Result;
use clap::Parser;
use swim_zone_gateway::{config::ServerConfig, logging, server};
use tracing::{error, info};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "swim-zone-gateway")]
#[command(about = "Swim zone gateway - classifies training sessions into intensity zones")]
#[command(version)]
struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting swim zone gateway");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
