// ABOUTME: HTTP middleware for cross-origin access and request correlation
// ABOUTME: Provides the CORS layer and the request ID generator used by the router

/// Cross-origin resource sharing layer
pub mod cors;
/// Request ID generation
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{new_request_id, request_id_header, GatewayRequestId};
