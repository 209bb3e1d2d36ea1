// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the swim zone gateway
//!
//! All configuration comes from environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, OpenAiConfig, ServerConfig};
