// ABOUTME: OpenAI-compatible chat completions client used for zone classification
// ABOUTME: Handles bearer auth, JSON output mode, and provider error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Client for any endpoint implementing the `OpenAI` chat completions API.
//! The gateway points it at `api.openai.com` by default; `OPENAI_BASE_URL`
//! redirects it to a proxy or a local server.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::OpenAiConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Connection timeout for the provider
const CONNECT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// Output format selector (`json_object` enables JSON mode)
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// API key sent as a bearer token
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Overall request timeout; `None` for no client-side limit
    pub request_timeout: Option<Duration>,
}

impl OpenAiCompatibleConfig {
    /// Build the provider configuration from the server's `OpenAI` settings
    #[must_use]
    pub fn from_server_config(config: &OpenAiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            default_model: config.model.clone(),
            request_timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> AppResult<Self> {
        let mut builder = Client::builder().connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing OpenAI-compatible provider: base_url={}, model={}",
            config.base_url, config.default_model
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    /// Parse error response from API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::auth_invalid(format!(
                    "API authentication failed: {}",
                    error_response.error.message
                )),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    Self::extract_rate_limit_message(&error_response.error.message),
                ),
                _ => AppError::external_service(
                    service_names::OPENAI,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            match status.as_u16() {
                502..=504 => AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{} is not responding ({status})", service_names::OPENAI),
                ),
                _ => AppError::external_service(
                    service_names::OPENAI,
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Extract a user-friendly rate limit message from an `OpenAI` error
    fn extract_rate_limit_message(message: &str) -> String {
        let lowered = message.to_lowercase();
        if let Some(retry_pos) = lowered.find("try again in ") {
            let after_prefix = &lowered[retry_pos + 13..];
            let end_pos = after_prefix
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(after_prefix.len());
            if let Ok(seconds) = after_prefix[..end_pos].parse::<f64>() {
                let seconds_int = seconds.ceil() as u64;
                return format!("LLM rate limit reached. Please try again in {seconds_int} seconds.");
            }
        }
        "LLM rate limit reached. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        if self.config.base_url.contains("api.openai.com") {
            "openai"
        } else {
            "openai-compatible"
        }
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        debug!(
            "Sending chat completion request with {} messages (json_output={})",
            openai_request.messages.len(),
            request.json_output
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", self.config.base_url, e);
                let app_error = if e.is_timeout() {
                    AppError::new(
                        ErrorCode::ExternalServiceUnavailable,
                        format!("{} request timed out", service_names::OPENAI),
                    )
                } else if e.is_connect() {
                    AppError::new(
                        ErrorCode::ExternalServiceUnavailable,
                        format!("Cannot connect to {}", self.config.base_url),
                    )
                } else {
                    AppError::external_service(
                        service_names::OPENAI,
                        format!("Failed to connect: {e}"),
                    )
                };
                app_error.with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service(service_names::OPENAI, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {}", e);
            AppError::external_service(service_names::OPENAI, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(service_names::OPENAI, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model.unwrap_or_else(|| model.to_owned()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_rate_limit_message_extracts_seconds() {
        let message = OpenAiCompatibleProvider::extract_rate_limit_message(
            "Rate limit reached for gpt-4o-mini. Please try again in 1.5s.",
        );
        assert_eq!(
            message,
            "LLM rate limit reached. Please try again in 2 seconds."
        );
    }

    #[test]
    fn test_rate_limit_message_fallback() {
        let message = OpenAiCompatibleProvider::extract_rate_limit_message("slow down");
        assert!(message.contains("wait a moment"));
    }

    #[test]
    fn test_parse_error_response_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;

        let auth = OpenAiCompatibleProvider::parse_error_response(StatusCode::UNAUTHORIZED, body);
        assert_eq!(auth.code, ErrorCode::AuthInvalid);

        let limited =
            OpenAiCompatibleProvider::parse_error_response(StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(limited.code, ErrorCode::ExternalRateLimited);

        let other =
            OpenAiCompatibleProvider::parse_error_response(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(other.code, ErrorCode::ExternalServiceError);
        assert!(other.message.contains("invalid_request_error"));

        for status in [StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND] {
            let error = OpenAiCompatibleProvider::parse_error_response(status, body);
            assert_eq!(error.code, ErrorCode::ExternalServiceError, "status {status}");
        }
    }

    #[test]
    fn test_parse_error_response_non_json() {
        let gateway =
            OpenAiCompatibleProvider::parse_error_response(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(gateway.code, ErrorCode::ExternalServiceUnavailable);

        let teapot = OpenAiCompatibleProvider::parse_error_response(StatusCode::IM_A_TEAPOT, "nope");
        assert_eq!(teapot.code, ErrorCode::ExternalServiceError);
        assert!(teapot.message.contains("nope"));
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig {
            base_url: "http://localhost:11434/v1/".to_owned(),
            api_key: None,
            default_model: "qwen2.5:7b-instruct".to_owned(),
            request_timeout: None,
        })
        .unwrap();

        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:11434/v1/chat/completions"
        );
        assert_eq!(provider.name(), "openai-compatible");
    }
}
