//! Request headers and request id generation.
//!
//! # Responsibilities
//! - Name the headers the redirect engine reads
//! - Generate a unique request ID (UUID v4) for tracing
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The ID is recorded in the trace span only; it is not echoed back so
//!   redirect and 404 responses carry no extra headers

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Protocol seen by a TLS-terminating proxy in front of us.
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Generates a UUID v4 request id unless the client already sent one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request id of `request`, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_request_id() {
        let req = Request::builder().uri("/").body(()).unwrap();
        let id = UuidRequestId.make_request_id(&req).unwrap();
        let id = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_request_id_fallback() {
        let req = Request::builder().uri("/").body(()).unwrap();
        assert_eq!(request_id(&req), "unknown");

        let req = Request::builder()
            .uri("/")
            .header("x-request-id", "abc")
            .body(())
            .unwrap();
        assert_eq!(request_id(&req), "abc");
    }
}
