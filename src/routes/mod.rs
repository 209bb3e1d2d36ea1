// ABOUTME: Route module organization for the swim zone gateway HTTP endpoints
// ABOUTME: Groups health checks and zone detection routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the swim zone gateway
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the zone detector.

/// Health check and readiness routes
pub mod health;
/// Zone detection routes
pub mod zones;

/// Health route handlers
pub use health::HealthRoutes;
/// Zone route state
pub use zones::ZoneContext;
/// Zone detection failure kinds
pub use zones::ZoneFailure;
/// Zone route handlers
pub use zones::ZoneRoutes;
