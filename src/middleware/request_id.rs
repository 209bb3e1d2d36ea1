// ABOUTME: Request ID generation for HTTP request correlation
// ABOUTME: Issues req_-prefixed UUIDs for requests that arrive without an x-request-id header

use http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::constants::headers;

/// Generates `req_<uuid>` identifiers
#[derive(Clone, Copy, Debug, Default)]
pub struct GatewayRequestId;

impl MakeRequestId for GatewayRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&new_request_id())
            .ok()
            .map(RequestId::new)
    }
}

/// Fresh request identifier
#[must_use]
pub fn new_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Header carrying the request identifier
#[must_use]
pub const fn request_id_header() -> HeaderName {
    HeaderName::from_static(headers::REQUEST_ID)
}
