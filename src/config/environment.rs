// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, provider credentials, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_vars};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::SocketAddr;
use tracing::info;

/// Environment type for logging and deployment behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Credentials and endpoint for the zone classification provider
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key; `None` when unset or empty
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model used for classification
    pub model: String,
    /// Request timeout. `None` leaves the call bounded only by the platform
    pub timeout_secs: Option<u64>,
}

impl OpenAiConfig {
    /// Whether a credential is available for the provider
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::OPENAI_BASE_URL.to_owned(),
            model: defaults::OPENAI_MODEL.to_owned(),
            timeout_secs: None,
        }
    }
}

// Manual impl keeps the API key out of logs
impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

impl CorsConfig {
    /// Parsed origin list; `["*"]` means any origin
    #[must_use]
    pub fn origins(&self) -> Vec<String> {
        parse_origins(&self.allowed_origins)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Classification provider
    pub openai: OpenAiConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Maximum accepted request body, in bytes
    pub max_request_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            openai: OpenAiConfig::default(),
            cors: CorsConfig::default(),
            max_request_body_bytes: defaults::MAX_REQUEST_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: env_var_or(env_vars::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            openai: OpenAiConfig {
                api_key: env::var(env_vars::OPENAI_API_KEY)
                    .ok()
                    .map(|k| k.trim().to_owned())
                    .filter(|k| !k.is_empty()),
                base_url: env_var_or(env_vars::OPENAI_BASE_URL, defaults::OPENAI_BASE_URL),
                model: env_var_or(env_vars::OPENAI_MODEL, defaults::OPENAI_MODEL),
                timeout_secs: env::var(env_vars::OPENAI_TIMEOUT_SECS)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| v.trim().parse::<u64>())
                    .transpose()
                    .context("Invalid OPENAI_TIMEOUT_SECS value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            max_request_body_bytes: env_var_or(
                env_vars::MAX_REQUEST_BODY_BYTES,
                &defaults::MAX_REQUEST_BODY_BYTES.to_string(),
            )
            .parse()
            .context("Invalid MAX_REQUEST_BODY_BYTES value")?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if !(self.openai.base_url.starts_with("http://")
            || self.openai.base_url.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "OPENAI_BASE_URL must be an http(s) URL, got '{}'",
                self.openai.base_url
            ));
        }

        if self.openai.model.trim().is_empty() {
            return Err(anyhow::anyhow!("OPENAI_MODEL cannot be empty"));
        }

        if self.openai.timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("OPENAI_TIMEOUT_SECS must be greater than 0"));
        }

        if self.max_request_body_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_REQUEST_BODY_BYTES must be greater than 0"
            ));
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Socket address the server binds to
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.http_port))
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Swim Zone Gateway Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Zone Detection: {}\n\
             - Provider URL: {}\n\
             - Model: {}\n\
             - Provider Timeout: {}\n\
             - CORS Origins: {}\n\
             - Max Body: {} bytes",
            self.host,
            self.http_port,
            self.environment,
            if self.openai.is_configured() {
                "Enabled"
            } else {
                "Disabled (OPENAI_API_KEY not set)"
            },
            self.openai.base_url,
            self.openai.model,
            self.openai
                .timeout_secs
                .map_or_else(|| "none".to_owned(), |secs| format!("{secs}s")),
            self.cors.allowed_origins,
            self.max_request_body_bytes,
        )
    }
}

/// Read an environment variable with a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
