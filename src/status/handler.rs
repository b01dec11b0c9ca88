//! Status endpoint handler.
//!
//! # Responsibilities
//! - Reject anything but GET with 405
//! - Serialize the current `StatusSnapshot` as JSON
//! - Map `Online` to 200 and `Error` to 503
//!
//! # Design Decisions
//! - An absent checker means "always online", not a misconfiguration
//! - Snapshots are taken per request and never cached

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response, StatusCode};

use crate::http::handler::{self, Handler};
use crate::status::checker::{Checker, StatusSnapshot};

/// Serves the service status page.
#[derive(Clone, Default)]
pub struct StatusHandler {
    version: String,
    checker: Option<Arc<dyn Checker>>,
}

impl StatusHandler {
    /// Create a status handler. An empty `version` is omitted from
    /// responses; a `None` checker always reports online.
    pub fn new(checker: Option<Arc<dyn Checker>>, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            checker,
        }
    }

    /// Take a snapshot of the current status.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::capture(self.checker.as_deref(), &self.version)
    }
}

impl std::fmt::Debug for StatusHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusHandler")
            .field("version", &self.version)
            .field("checker", &self.checker.is_some())
            .finish()
    }
}

impl Handler for StatusHandler {
    fn handle(&self, req: &Request<Body>) -> Response<Body> {
        if *req.method() != Method::GET {
            return handler::plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        }

        let snapshot = self.snapshot();
        let body = match serde_json::to_vec(&snapshot) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode status response");
                return handler::plain_text(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to encode response",
                );
            }
        };

        let status = if snapshot.is_online() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}
