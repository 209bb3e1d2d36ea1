// ABOUTME: HTTP server assembly for the swim zone gateway
// ABOUTME: Wires the classifier, routes and tower middleware, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server
//!
//! [`build_router`] produces the complete application, middleware included,
//! so integration tests drive exactly what [`run`] serves.

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::{OpenAiConfig, ServerConfig};
use crate::errors::AppResult;
use crate::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::middleware::{request_id_header, setup_cors, GatewayRequestId};
use crate::routes::{HealthRoutes, ZoneContext, ZoneRoutes};
use crate::zones::{LlmZoneDetector, ZoneDetector};

/// Build the classifier for the configured provider
///
/// Returns `Ok(None)` when no API key is configured; the gateway then answers
/// detection requests with its 503 envelope.
///
/// # Errors
///
/// Returns an error if the provider HTTP client cannot be created
pub fn build_detector(config: &OpenAiConfig) -> AppResult<Option<Arc<dyn ZoneDetector>>> {
    if !config.is_configured() {
        warn!("OPENAI_API_KEY is not set; zone detection will answer 503");
        return Ok(None);
    }

    let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiCompatibleProvider::new(
        OpenAiCompatibleConfig::from_server_config(config),
    )?);

    info!(
        provider = provider.name(),
        model = provider.default_model(),
        "Zone detection enabled"
    );

    Ok(Some(Arc::new(LlmZoneDetector::new(provider))))
}

/// Assemble routes and middleware
pub fn build_router(config: &ServerConfig, detector: Option<Arc<dyn ZoneDetector>>) -> Router {
    let context = Arc::new(detector.map_or_else(ZoneContext::unconfigured, ZoneContext::new));

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&context)))
        .merge(ZoneRoutes::routes(context))
        .layer(DefaultBodyLimit::max(config.max_request_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), GatewayRequestId))
        .layer(setup_cors(config))
}

/// Serve the gateway until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the classifier cannot be
/// built, or the listener cannot bind
pub async fn run(config: ServerConfig) -> Result<()> {
    config.validate()?;

    let detector =
        build_detector(&config.openai).context("Failed to initialize zone detection provider")?;
    let app = build_router(&config, detector);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Swim zone gateway listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on the first shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
