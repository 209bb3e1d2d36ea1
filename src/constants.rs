// ABOUTME: System-wide constants and environment-backed defaults for the zone gateway
// ABOUTME: Groups env variable names, defaults, routes and fixed envelope messages by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Classification provider credential
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Classification provider base URL
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Classification model
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// Optional request timeout for the provider call
    pub const OPENAI_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request body size limit
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
}

/// Default configuration values
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default OpenAI-compatible endpoint
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default classification model
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";
    /// Default CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default request body limit (64 KiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// Service identity used in logs and health payloads
pub mod service_names {
    /// Gateway service
    pub const SWIM_ZONE_GATEWAY: &str = "swim-zone-gateway";
    /// Provider label used in error messages
    pub const OPENAI: &str = "OpenAI";
}

/// HTTP route paths
pub mod routes {
    /// Liveness
    pub const HEALTH: &str = "/health";
    /// Readiness
    pub const READY: &str = "/ready";
    /// Zone detection endpoint
    pub const DETECT_ZONES: &str = "/api/ai/detect-zones";
}

/// Header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Fixed messages carried by the zone envelope on failure
pub mod zone_messages {
    /// `error` for a malformed request
    pub const CONTENT_REQUIRED: &str = "Content is required and must be a string";
    /// `reasoning` for a malformed request
    pub const CONTENT_REQUIRED_REASONING: &str =
        "Aucune description de séance exploitable n'a été fournie.";

    /// `error` when the provider credential is missing
    pub const API_KEY_NOT_CONFIGURED: &str = "OpenAI API key not configured";
    /// `reasoning` when the provider credential is missing
    pub const API_KEY_NOT_CONFIGURED_REASONING: &str =
        "La détection automatique des zones n'est pas disponible : la clé API OpenAI n'est pas configurée.";
    /// Suggestion when the provider credential is missing
    pub const API_KEY_NOT_CONFIGURED_SUGGESTION: &str =
        "Configurez la variable d'environnement OPENAI_API_KEY pour activer la détection automatique des zones.";

    /// `error` for any failure during delegation
    pub const INTERNAL_ERROR: &str = "Internal server error";
    /// `reasoning` for any failure during delegation
    pub const INTERNAL_ERROR_REASONING: &str =
        "Une erreur est survenue lors de l'analyse de la séance.";
}
