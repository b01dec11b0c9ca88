//! Status multiplexer.
//!
//! # Responsibilities
//! - Send requests for the status path to the status handler
//! - Send everything else to the upstream handler
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Never writes a response itself; always delegates

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use percent_encoding::percent_decode_str;

use crate::http::handler::Handler;
use crate::routing::matcher::{RouteDecision, StatusPrefixMatcher};
use crate::status::{Checker, StatusHandler};

/// Multiplexes a status endpoint in front of an upstream handler.
pub struct StatusMux {
    matcher: StatusPrefixMatcher,
    status: Arc<dyn Handler>,
    upstream: Arc<dyn Handler>,
}

impl StatusMux {
    /// Wrap `upstream` with a status endpoint at `path`.
    pub fn new(
        upstream: Arc<dyn Handler>,
        checker: Option<Arc<dyn Checker>>,
        version: &str,
        path: &str,
    ) -> Self {
        Self::with_status(upstream, Arc::new(StatusHandler::new(checker, version)), path)
    }

    /// Wrap `upstream` with an arbitrary status handler at `path`.
    pub fn with_status(upstream: Arc<dyn Handler>, status: Arc<dyn Handler>, path: &str) -> Self {
        Self {
            matcher: StatusPrefixMatcher::new(path),
            status,
            upstream,
        }
    }

    /// Route on the percent-decoded request path.
    pub fn route(&self, req: &Request<Body>) -> RouteDecision {
        let path = percent_decode_str(req.uri().path()).decode_utf8_lossy();
        self.matcher.route(&path)
    }
}

impl Handler for StatusMux {
    fn handle(&self, req: &Request<Body>) -> Response<Body> {
        match self.route(req) {
            RouteDecision::ToStatus => self.status.handle(req),
            RouteDecision::ToUpstream => self.upstream.handle(req),
        }
    }
}

impl std::fmt::Debug for StatusMux {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusMux")
            .field("prefix", &self.matcher.prefix())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::http::handler::empty;
    use crate::redirect::RedirectHandler;

    fn request(path: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("http://example.com{}", path))
            .body(Body::empty())
            .unwrap()
    }

    fn no_content() -> Arc<dyn Handler> {
        Arc::new(|_: &Request<Body>| empty(StatusCode::NO_CONTENT))
    }

    #[test]
    fn test_status_middleware() {
        for path in ["ping", "_status"] {
            let mux = StatusMux::new(no_content(), None, "", path);

            let cases = [
                (format!("/{}", path), StatusCode::OK),
                (format!("/{}/", path), StatusCode::OK),
                (format!("/{}/subpath", path), StatusCode::NO_CONTENT),
                ("/users".to_string(), StatusCode::NO_CONTENT),
            ];
            for (url_path, want) in cases {
                let response = mux.handle(&request(&url_path));
                assert_eq!(response.status(), want, "prefix={} path={}", path, url_path);
            }
        }
    }

    #[test]
    fn test_similar_prefix_goes_upstream() {
        let mux = StatusMux::new(no_content(), None, "", "_status");
        assert_eq!(mux.route(&request("/_status2")), RouteDecision::ToUpstream);
        assert_eq!(mux.handle(&request("/_status2")).status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_matches_decoded_path() {
        let mux = StatusMux::new(no_content(), None, "", "_status");
        assert_eq!(mux.route(&request("/%5Fstatus")), RouteDecision::ToStatus);
        assert_eq!(mux.route(&request("/_status%2F")), RouteDecision::ToStatus);
        assert_eq!(mux.route(&request("/%5Fstatus/sub")), RouteDecision::ToUpstream);
        assert_eq!(mux.handle(&request("/%5Fstatus")).status(), StatusCode::OK);
    }

    #[test]
    fn test_query_string_ignored() {
        let mux = StatusMux::new(no_content(), None, "", "_status");
        assert_eq!(mux.route(&request("/_status?verbose=1")), RouteDecision::ToStatus);
    }

    #[test]
    fn test_wraps_redirect_handler() {
        let mux = StatusMux::new(Arc::new(RedirectHandler::new(true, false)), None, "", "_status");

        assert_eq!(mux.handle(&request("/_status/")).status(), StatusCode::OK);
        assert_eq!(
            mux.handle(&request("/users")).status(),
            StatusCode::TEMPORARY_REDIRECT
        );
    }
}
