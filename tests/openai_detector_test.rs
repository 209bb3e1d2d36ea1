// ABOUTME: End-to-end tests of zone detection against a mocked OpenAI-compatible API
// ABOUTME: Exercises the provider, detector and gateway envelope together using wiremock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Number, Value};
use std::sync::Arc;
use swim_zone_gateway::config::{OpenAiConfig, ServerConfig};
use swim_zone_gateway::constants::{routes, zone_messages};
use swim_zone_gateway::errors::ErrorCode;
use swim_zone_gateway::llm::{
    ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider,
};
use swim_zone_gateway::server::{build_detector, build_router};
use swim_zone_gateway::zones::{LlmZoneDetector, ZoneDetectionRequest, ZoneDetector};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLASSIFICATION: &str = r#"{"zones":{"z1":20,"z2":10,"z3":60,"z4":5,"z5":5},"confidence":0.8,"reasoning":"Bloc principal au seuil.","suggestions":[]}"#;

fn openai_config(server: &MockServer) -> OpenAiConfig {
    OpenAiConfig {
        api_key: Some("sk-test".to_owned()),
        base_url: server.uri(),
        model: "gpt-4o-mini".to_owned(),
        timeout_secs: Some(5),
    }
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 310, "completion_tokens": 60, "total_tokens": 370}
    })
}

fn gateway(server: &MockServer) -> axum::Router {
    let config = ServerConfig {
        openai: openai_config(server),
        ..ServerConfig::default()
    };
    let detector = build_detector(&config.openai).unwrap();
    build_router(&config, detector)
}

fn detector(server: &MockServer) -> LlmZoneDetector {
    let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from_server_config(
        &openai_config(server),
    ))
    .unwrap();
    LlmZoneDetector::new(Arc::new(provider))
}

#[tokio::test]
async fn test_gateway_returns_classification_from_provider() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "response_format": {"type": "json_object"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(CLASSIFICATION)))
        .expect(1)
        .mount(&server)
        .await;

    let response = AxumTestRequest::post(routes::DETECT_ZONES)
        .json(&json!({"content": "400m warm up, 8x100 threshold, 200m cool down"}))
        .send(gateway(&server))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let provider_answer: Value = serde_json::from_str(CLASSIFICATION).unwrap();
    assert_eq!(body, provider_answer);
    assert_eq!(body["zones"]["z1"].to_string(), "20");
}

#[tokio::test]
async fn test_session_text_and_context_reach_the_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(CLASSIFICATION)))
        .mount(&server)
        .await;

    let request = ZoneDetectionRequest::new("6x200 pull @3'10")
        .with_objective("endurance")
        .with_time_slot(swim_zone_gateway::zones::TimeSlot::Am);
    detector(&server).detect_zones(&request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
    let user_message = sent["messages"][1]["content"].as_str().unwrap();

    assert_eq!(sent["messages"][0]["role"], "system");
    assert!(user_message.contains("6x200 pull @3'10"));
    assert!(user_message.contains("Objective: endurance"));
    assert!(user_message.contains("Time slot: AM"));
}

#[tokio::test]
async fn test_fenced_model_output_is_parsed() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{CLASSIFICATION}\n```");

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&fenced)))
        .mount(&server)
        .await;

    let result = detector(&server)
        .detect_zones(&ZoneDetectionRequest::new("8x100 threshold"))
        .await
        .unwrap();

    assert_eq!(result.zones.z3, Number::from(60));
    assert_eq!(result.reasoning, "Bloc principal au seuil.");
}

#[tokio::test]
async fn test_unparseable_model_output_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("Je ne peux pas analyser cela.")),
        )
        .mount(&server)
        .await;

    let error = detector(&server)
        .detect_zones(&ZoneDetectionRequest::new("8x100 threshold"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);

    let response = AxumTestRequest::post(routes::DETECT_ZONES)
        .json(&json!({"content": "8x100 threshold"}))
        .send(gateway(&server))
        .await;
    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_provider_http_errors_map_to_error_codes() {
    let cases = [
        (
            429,
            json!({"error": {"message": "Rate limit reached. Please try again in 1.5s.", "type": "requests"}}),
            ErrorCode::ExternalRateLimited,
        ),
        (
            401,
            json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}),
            ErrorCode::AuthInvalid,
        ),
        (
            500,
            json!({"error": {"message": "The server had an error", "type": "server_error"}}),
            ErrorCode::ExternalServiceError,
        ),
    ];

    for (status, body, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;

        let error = detector(&server)
            .detect_zones(&ZoneDetectionRequest::new("1500 easy"))
            .await
            .unwrap_err();
        assert_eq!(error.code, expected, "status {status}");

        let response = AxumTestRequest::post(routes::DETECT_ZONES)
            .json(&json!({"content": "1500 easy"}))
            .send(gateway(&server))
            .await;
        assert_eq!(response.status(), 500, "status {status}");
        let envelope: Value = response.json();
        assert_eq!(envelope["error"], zone_messages::INTERNAL_ERROR);
        assert_eq!(envelope["zones"]["z1"], json!(0));
    }
}

#[tokio::test]
async fn test_rate_limit_message_rounds_retry_delay_up() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit reached. Please try again in 1.5s.", "type": "requests"}
        })))
        .mount(&server)
        .await;

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from_server_config(
        &openai_config(&server),
    ))
    .unwrap();
    let error = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();

    assert_eq!(
        error.message,
        "LLM rate limit reached. Please try again in 2 seconds."
    );
}

#[tokio::test]
async fn test_gateway_without_key_never_calls_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(CLASSIFICATION)))
        .expect(0)
        .mount(&server)
        .await;

    let config = ServerConfig {
        openai: OpenAiConfig {
            api_key: None,
            ..openai_config(&server)
        },
        ..ServerConfig::default()
    };
    let app = build_router(&config, build_detector(&config.openai).unwrap());

    let response = AxumTestRequest::post(routes::DETECT_ZONES)
        .json(&json!({"content": "1500 easy"}))
        .send(app)
        .await;
    assert_eq!(response.status(), 503);
}
