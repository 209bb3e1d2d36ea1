// ABOUTME: Zone detection route handler exposing the classifier over HTTP
// ABOUTME: Validates the session body and folds every failure into the zone-shaped envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Zone detection routes
//!
//! `POST /api/ai/detect-zones` never lets an error escape as a bare status:
//! validation, configuration and delegation failures all answer with zero
//! zones plus an `error` message, and a classifier result is passed through
//! as-is.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::constants::{routes, zone_messages};
use crate::errors::AppError;
use crate::zones::{
    ValidationError, ZoneDetectionRequest, ZoneDetectionResponse, ZoneDetectionResult,
    ZoneDetector,
};

/// Shared state for the zone routes
#[derive(Clone, Default)]
pub struct ZoneContext {
    /// Classifier; `None` when no provider credential is configured
    pub detector: Option<Arc<dyn ZoneDetector>>,
}

impl ZoneContext {
    /// Context backed by a classifier
    #[must_use]
    pub fn new(detector: Arc<dyn ZoneDetector>) -> Self {
        Self {
            detector: Some(detector),
        }
    }

    /// Context without a classifier; every request answers 503
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { detector: None }
    }

    /// Whether requests can be delegated
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.detector.is_some()
    }
}

/// The three ways a detection request can fail
#[derive(Debug)]
pub enum ZoneFailure {
    /// The body does not carry usable session text
    Validation(ValidationError),
    /// No provider credential at startup
    NotConfigured,
    /// Anything that went wrong while delegating
    Unexpected(AppError),
}

impl ZoneFailure {
    /// HTTP status for this failure
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed zero-zone envelope for this failure
    #[must_use]
    pub fn response(&self) -> ZoneDetectionResponse {
        match self {
            Self::Validation(_) => ZoneDetectionResponse::failure(
                zone_messages::CONTENT_REQUIRED,
                ZoneDetectionResult::zeroed(zone_messages::CONTENT_REQUIRED_REASONING),
            ),
            Self::NotConfigured => {
                let mut result =
                    ZoneDetectionResult::zeroed(zone_messages::API_KEY_NOT_CONFIGURED_REASONING);
                result.suggestions =
                    Some(vec![zone_messages::API_KEY_NOT_CONFIGURED_SUGGESTION.to_owned()]);
                ZoneDetectionResponse::failure(zone_messages::API_KEY_NOT_CONFIGURED, result)
            }
            Self::Unexpected(_) => ZoneDetectionResponse::failure(
                zone_messages::INTERNAL_ERROR,
                ZoneDetectionResult::zeroed(zone_messages::INTERNAL_ERROR_REASONING),
            ),
        }
    }
}

impl From<ValidationError> for ZoneFailure {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<AppError> for ZoneFailure {
    fn from(error: AppError) -> Self {
        Self::Unexpected(error)
    }
}

impl IntoResponse for ZoneFailure {
    fn into_response(self) -> Response {
        (self.status(), Json(self.response())).into_response()
    }
}

/// Zone routes handler
pub struct ZoneRoutes;

impl ZoneRoutes {
    /// Create the zone detection routes
    pub fn routes(context: Arc<ZoneContext>) -> Router {
        Router::new()
            .route(routes::DETECT_ZONES, post(Self::detect_zones))
            .with_state(context)
    }

    /// Classify a session description
    ///
    /// The body is read raw so malformed JSON and oversized or unreadable
    /// bodies land in the same 400 envelope as a missing `content` field.
    async fn detect_zones(
        State(context): State<Arc<ZoneContext>>,
        body: Result<Bytes, BytesRejection>,
    ) -> Response {
        let body = match body {
            Ok(body) => body,
            Err(rejection) => {
                warn!(
                    status = rejection.status().as_u16(),
                    "Unreadable zone detection body: {}",
                    rejection.body_text()
                );
                return ZoneFailure::from(ValidationError::UnreadableBody(rejection.body_text()))
                    .into_response();
            }
        };

        match Self::handle(&context, &body).await {
            Ok(result) => {
                (StatusCode::OK, Json(ZoneDetectionResponse::success(result))).into_response()
            }
            Err(failure) => failure.into_response(),
        }
    }

    async fn handle(context: &ZoneContext, body: &[u8]) -> Result<ZoneDetectionResult, ZoneFailure> {
        let request = ZoneDetectionRequest::from_body(body).map_err(|e| {
            warn!(body_len = body.len(), "Rejected zone detection request: {e}");
            ZoneFailure::from(e)
        })?;

        let Some(detector) = &context.detector else {
            warn!("Zone detection requested but no OpenAI API key is configured");
            return Err(ZoneFailure::NotConfigured);
        };

        let result = detector.detect_zones(&request).await.map_err(|e| {
            error!(
                detector = detector.name(),
                content_len = request.content.len(),
                error_code = ?e.code,
                "Zone detection failed: {e}"
            );
            ZoneFailure::from(e)
        })?;

        info!(
            detector = detector.name(),
            content_len = request.content.len(),
            z1 = %result.zones.z1,
            z2 = %result.zones.z2,
            z3 = %result.zones.z3,
            z4 = %result.zones.z4,
            z5 = %result.zones.z5,
            confidence = %result.confidence,
            "Zones detected"
        );

        Ok(result)
    }
}
