// ABOUTME: Stub zone detectors and router builders shared by the route tests
// ABOUTME: Lets tests exercise the gateway without any outbound network call

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use swim_zone_gateway::config::ServerConfig;
use swim_zone_gateway::errors::{AppError, AppResult};
use swim_zone_gateway::server::build_router;
use swim_zone_gateway::zones::{ZoneDetectionRequest, ZoneDetectionResult, ZoneDetector};

/// Detector returning a fixed result and counting calls
pub struct FixedDetector {
    result: ZoneDetectionResult,
    calls: AtomicUsize,
}

impl FixedDetector {
    pub fn new(result: ZoneDetectionResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneDetector for FixedDetector {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn detect_zones(&self, _request: &ZoneDetectionRequest) -> AppResult<ZoneDetectionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

/// Detector that always fails
pub struct FailingDetector;

#[async_trait]
impl ZoneDetector for FailingDetector {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn detect_zones(&self, _request: &ZoneDetectionRequest) -> AppResult<ZoneDetectionResult> {
        Err(AppError::external_service("OpenAI", "upstream exploded"))
    }
}

/// Full application router around an optional detector
#[allow(dead_code)]
pub fn app_with(detector: Option<Arc<dyn ZoneDetector>>) -> axum::Router {
    build_router(&ServerConfig::default(), detector)
}
