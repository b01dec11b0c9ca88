//! Request handler capability.
//!
//! # Responsibilities
//! - Define the single "handle request" capability shared by the redirect
//!   engine, the status responder and the path router
//! - Allow handlers to wrap one another (constructor injection)
//! - Provide small response builders used by every handler
//!
//! # Design Decisions
//! - Handlers are synchronous: no handler blocks or performs I/O
//! - Handlers are immutable after construction and shared via `Arc`
//! - Closures are handlers too, which keeps tests terse

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, Response, StatusCode};

/// A component that turns a request into exactly one response.
pub trait Handler: Send + Sync {
    /// Produce the response for `req`.
    fn handle(&self, req: &Request<Body>) -> Response<Body>;
}

impl<F> Handler for F
where
    F: Fn(&Request<Body>) -> Response<Body> + Send + Sync,
{
    fn handle(&self, req: &Request<Body>) -> Response<Body> {
        self(req)
    }
}

/// A response with the given status code and an empty body.
pub fn empty(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

/// A `text/plain` response.
pub fn plain_text(status: StatusCode, body: impl Into<String>) -> Response<Body> {
    let mut response = Response::new(Body::from(body.into()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

/// A `307 Temporary Redirect` to `location`.
///
/// Falls back to a bare 500 if `location` is not a valid header value.
pub fn temporary_redirect(location: &str) -> Response<Body> {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = empty(StatusCode::TEMPORARY_REDIRECT);
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(e) => {
            tracing::error!(location = %location, error = %e, "Invalid redirect location");
            empty(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_closure_is_handler() {
        let handler = |_: &Request<Body>| empty(StatusCode::NO_CONTENT);
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(handler.handle(&req).status(), StatusCode::NO_CONTENT);

        let shared: Arc<dyn Handler> = Arc::new(handler);
        assert_eq!(shared.handle(&req).status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_temporary_redirect() {
        let response = temporary_redirect("https://example.com/path");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/path"
        );

        let response = temporary_redirect("https://example.com/\n");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_plain_text() {
        let response = plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
