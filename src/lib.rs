// ABOUTME: Main library entry point for the swim zone gateway
// ABOUTME: Classifies free-text swim sessions into training zones through an LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swim Zone Gateway
//!
//! An HTTP gateway that takes a free-text swim training session, asks an
//! OpenAI-compatible model how its volume splits across the five intensity
//! zones, and returns the breakdown.
//!
//! ## Architecture
//!
//! - **Routes**: `POST /api/ai/detect-zones`, `/health`, `/ready`
//! - **Zones**: domain types, request validation and the [`zones::ZoneDetector`] capability
//! - **LLM**: the [`llm::LlmProvider`] abstraction and its OpenAI-compatible client
//! - **Config**: environment-driven [`config::ServerConfig`]
//!
//! Every failure on the detection endpoint still answers with the zone-shaped
//! envelope, with zero zones and an `error` message.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use swim_zone_gateway::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     swim_zone_gateway::server::run(config).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and the OpenAI-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Training zone domain and zone detection
pub mod zones;
