// ABOUTME: CORS middleware configuration for the zone detection endpoint
// ABOUTME: Builds the Cross-Origin Resource Sharing layer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;
use crate::constants::headers;

/// Configure CORS for the dashboard calling the gateway
///
/// `CORS_ALLOWED_ORIGINS` is either `*` or a comma-separated origin list.
/// Entries that are not valid header values are skipped; a list with no
/// usable entry falls back to any origin.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let configured = config.cors.origins();
    // AllowOrigin::list panics on a wildcard entry
    let origins: Vec<HeaderValue> = if configured.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        configured
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    };

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(headers::REQUEST_ID),
        ])
        .expose_headers([HeaderName::from_static(headers::REQUEST_ID)])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
