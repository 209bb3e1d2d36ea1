// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints, readiness reporting classifier availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` answers as long as the process serves requests. `/ready` also
//! reports whether zone detection can reach a classifier; an unconfigured
//! gateway is still ready, since it answers every detection with a 503
//! envelope.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::constants::{routes, service_names};
use crate::routes::zones::ZoneContext;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(context: Arc<ZoneContext>) -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "service": service_names::SWIM_ZONE_GATEWAY,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(State(context): State<Arc<ZoneContext>>) -> Json<Value> {
            let zone_detection = if context.is_configured() {
                "configured"
            } else {
                "unconfigured"
            };

            Json(json!({
                "status": "ready",
                "zone_detection": zone_detection,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(routes::HEALTH, get(health_handler))
            .route(routes::READY, get(ready_handler))
            .with_state(context)
    }
}
