// ABOUTME: Zone detection capability and its LLM-backed implementation
// ABOUTME: Sends the session to a chat model in JSON mode and decodes the zone breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Zone Detector
//!
//! [`ZoneDetector`] is the single operation the HTTP gateway depends on.
//! [`LlmZoneDetector`] implements it on top of any [`LlmProvider`]; the
//! decoded result is returned exactly as the model produced it.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::prompts::{zone_system_prompt, zone_user_prompt};
use super::{ZoneDetectionRequest, ZoneDetectionResult};
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Sampling temperature for classification
const CLASSIFICATION_TEMPERATURE: f32 = 0.2;

/// Completion budget; the JSON answer is short
const CLASSIFICATION_MAX_TOKENS: u32 = 600;

/// Classifies a session description into training zones
#[async_trait]
pub trait ZoneDetector: Send + Sync {
    /// Identifier of the backing classifier, for logs
    fn name(&self) -> &'static str;

    /// Classify one session
    async fn detect_zones(&self, request: &ZoneDetectionRequest) -> AppResult<ZoneDetectionResult>;
}

/// Zone detector backed by a chat completion model
pub struct LlmZoneDetector {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
}

impl LlmZoneDetector {
    /// Detector using the provider's default model
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: None,
        }
    }

    /// Override the model sent with each request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn build_chat_request(&self, request: &ZoneDetectionRequest) -> ChatRequest {
        let chat_request = ChatRequest::new(vec![
            ChatMessage::system(zone_system_prompt()),
            ChatMessage::user(zone_user_prompt(request)),
        ])
        .with_temperature(CLASSIFICATION_TEMPERATURE)
        .with_max_tokens(CLASSIFICATION_MAX_TOKENS)
        .with_json_output();

        match &self.model {
            Some(model) => chat_request.with_model(model.clone()),
            None => chat_request,
        }
    }
}

#[async_trait]
impl ZoneDetector for LlmZoneDetector {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    #[instrument(skip(self, request), fields(provider = self.provider.name(), content_len = request.content.len()))]
    async fn detect_zones(&self, request: &ZoneDetectionRequest) -> AppResult<ZoneDetectionResult> {
        let response = self
            .provider
            .complete(&self.build_chat_request(request))
            .await?;

        debug!(
            model = %response.model,
            finish_reason = ?response.finish_reason,
            "Classifier answered with {} chars",
            response.content.len()
        );

        parse_zone_result(&response.content)
    }
}

/// Decode the model's answer into a zone result
///
/// # Errors
///
/// Returns a serialization error when no JSON object can be found or when it
/// does not carry a `zones` object
pub fn parse_zone_result(content: &str) -> AppResult<ZoneDetectionResult> {
    let json = extract_json_object(content).ok_or_else(|| {
        warn!("Classifier answer holds no JSON object");
        AppError::serialization("Classifier answer holds no JSON object")
    })?;

    serde_json::from_str(json).map_err(|e| {
        warn!("Classifier answer does not match the zone schema: {e}");
        AppError::from(e)
    })
}

/// Slice of `content` spanning its outermost JSON object
///
/// Tolerates Markdown code fences and prose around the object.
#[must_use]
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}
