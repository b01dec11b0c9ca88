//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → router.rs (StatusMux)
//!     → matcher.rs (trimmed prefix comparison)
//!     → ToStatus   → status handler
//!     → ToUpstream → upstream handler (redirects)
//! ```
//!
//! # Design Decisions
//! - Prefix compiled at startup, immutable at runtime
//! - Deterministic: same path always routes the same way
//! - No method checks, no query-string involvement

pub mod matcher;
pub mod router;

pub use matcher::{RouteDecision, StatusPrefixMatcher};
pub use router::StatusMux;
