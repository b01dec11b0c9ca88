//! Status prefix matching.
//!
//! # Responsibilities
//! - Trim `/` from both ends of the configured prefix and the request path
//! - Decide whether a path addresses the status endpoint exactly
//!
//! # Design Decisions
//! - Comparison is by byte length, not by path segment: a path that merely
//!   starts with the prefix (e.g. `_status2`) counts as inside the namespace
//!   and is routed upstream
//! - Case-sensitive, query string ignored

/// Where a request should be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    ToStatus,
    ToUpstream,
}

/// Matches the status endpoint path.
#[derive(Debug, Clone)]
pub struct StatusPrefixMatcher {
    prefix: String,
}

impl StatusPrefixMatcher {
    /// Create a matcher. Leading and trailing slashes are ignored.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    /// The trimmed prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Route a request path.
    pub fn route(&self, path: &str) -> RouteDecision {
        let path = path.trim_matches('/');
        let (l_prefix, l_path) = (self.prefix.len(), path.len());

        if l_path >= l_prefix && path.as_bytes()[..l_prefix] == *self.prefix.as_bytes() {
            if l_path > l_prefix {
                RouteDecision::ToUpstream
            } else {
                RouteDecision::ToStatus
            }
        } else {
            RouteDecision::ToUpstream
        }
    }
}
