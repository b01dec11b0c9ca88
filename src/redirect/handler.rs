//! HTTP handler wrapping the redirect decision.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};

use crate::http::handler::{self, Handler};
use crate::observability::metrics;
use crate::redirect::engine::{RedirectDecision, RedirectPolicy, RequestView};

/// Answers every request with either a 307 upgrade redirect or an empty 404.
#[derive(Debug, Clone, Copy)]
pub struct RedirectHandler {
    policy: RedirectPolicy,
}

impl RedirectHandler {
    /// `upgrade_ssl` enables `http` → `https`, `upgrade_www` enables
    /// `example.com` → `www.example.com`.
    pub fn new(upgrade_ssl: bool, upgrade_www: bool) -> Self {
        Self {
            policy: RedirectPolicy::new(upgrade_ssl, upgrade_www),
        }
    }
}

impl Handler for RedirectHandler {
    fn handle(&self, req: &Request<Body>) -> Response<Body> {
        let view = RequestView::from_request(req);

        match self.policy.decide(&view) {
            RedirectDecision::Redirect(target) => {
                let location = target.to_string();
                tracing::debug!(
                    authority = %view.authority,
                    location = %location,
                    "Redirecting request"
                );
                metrics::record_decision(true);
                handler::temporary_redirect(&location)
            }
            RedirectDecision::NoAction => {
                tracing::debug!(authority = %view.authority, "No upgrade needed");
                metrics::record_decision(false);
                handler::empty(StatusCode::NOT_FOUND)
            }
        }
    }
}
