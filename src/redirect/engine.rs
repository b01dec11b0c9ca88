//! Redirect decision logic.
//!
//! # Responsibilities
//! - Resolve the effective protocol (`X-Forwarded-Proto` over URL scheme)
//! - Resolve the effective host (`Host` header over connection authority)
//! - Decide whether an HTTPS and/or `www.` upgrade applies
//! - Build the redirect target, keeping path and query untouched
//!
//! # Design Decisions
//! - Pure function of the request view and the two flags
//! - The `Host` header replaces the host name only; a port taken from the
//!   connection authority is still re-appended
//! - IP literals never receive a `www.` prefix

use std::fmt;

use axum::body::Body;
use axum::http::{header, Request};

use crate::http::request::X_FORWARDED_PROTO;
use crate::redirect::authority::{is_ip_address, join_host_port, split_host_port};

const HTTPS: &str = "https";
const WWW_PREFIX: &str = "www.";

/// Read-only projection of the request parts the engine looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestView<'a> {
    /// URL scheme, empty for origin-form requests.
    pub scheme: &'a str,
    /// Connection-level host authority (`host` or `host:port`).
    pub authority: &'a str,
    /// Path and query exactly as received. May be empty.
    pub path_and_query: &'a str,
    /// `Host` header, when it is distinct from `authority`.
    pub host_header: Option<&'a str>,
    /// `X-Forwarded-Proto` header.
    pub forwarded_proto: Option<&'a str>,
}

impl<'a> RequestView<'a> {
    /// Project an incoming request.
    ///
    /// For origin-form requests the `Host` header is the connection
    /// authority. For absolute-form requests the URI carries the authority
    /// and the `Host` header acts as an override.
    pub fn from_request(req: &'a Request<Body>) -> Self {
        let uri = req.uri();
        let host = req
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok());

        let (authority, host_header) = match uri.authority() {
            Some(authority) => (authority.as_str(), host),
            None => (host.unwrap_or_default(), None),
        };

        Self {
            scheme: uri.scheme_str().unwrap_or_default(),
            authority,
            path_and_query: uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_default(),
            host_header,
            forwarded_proto: req
                .headers()
                .get(&X_FORWARDED_PROTO)
                .and_then(|v| v.to_str().ok()),
        }
    }
}

/// Where a redirected request should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub scheme: String,
    pub authority: String,
    pub path_and_query: String,
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        write!(f, "//{}{}", self.authority, self.path_and_query)
    }
}

/// Outcome of the redirect decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Respond with `307 Temporary Redirect` to the target.
    Redirect(RedirectTarget),
    /// No upgrade applies.
    NoAction,
}

/// Which upgrades are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedirectPolicy {
    /// Redirect `http` to `https`.
    pub upgrade_ssl: bool,
    /// Redirect `example.com` to `www.example.com`.
    pub upgrade_www: bool,
}

impl RedirectPolicy {
    pub fn new(upgrade_ssl: bool, upgrade_www: bool) -> Self {
        Self {
            upgrade_ssl,
            upgrade_www,
        }
    }

    /// Decide whether `view` must be redirected.
    pub fn decide(&self, view: &RequestView<'_>) -> RedirectDecision {
        let mut redirect = false;

        let mut proto = match view.forwarded_proto {
            Some(p) if !p.is_empty() => p.to_lowercase(),
            _ => view.scheme.to_lowercase(),
        };

        let (mut host, port) = match split_host_port(view.authority) {
            Some((host, port)) => (host.to_string(), port),
            None => (view.authority.to_string(), ""),
        };
        if let Some(h) = view.host_header.filter(|h| !h.is_empty()) {
            host = h.to_string();
        }

        if self.upgrade_ssl && proto != HTTPS {
            proto = HTTPS.to_string();
            redirect = true;
        }

        if self.upgrade_www && !host.starts_with(WWW_PREFIX) && !is_ip_address(&host) {
            host = format!("{}{}", WWW_PREFIX, host);
            redirect = true;
        }

        if !redirect {
            return RedirectDecision::NoAction;
        }

        let authority = if port.is_empty() {
            host
        } else {
            join_host_port(&host, port)
        };

        RedirectDecision::Redirect(RedirectTarget {
            scheme: proto,
            authority,
            path_and_query: view.path_and_query.to_string(),
        })
    }
}
