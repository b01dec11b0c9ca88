//! Redirect subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → engine.rs (RequestView projection, header precedence)
//!     → authority.rs (host:port split, IP literal detection)
//!     → engine.rs (RedirectDecision: Redirect(target) or NoAction)
//!     → handler.rs (307 + Location, or empty 404)
//! ```
//!
//! # Design Decisions
//! - Decisions are pure and computed once per request
//! - Path and query are copied verbatim; only scheme and authority change
//! - "No upgrade needed" is a value, answered with 404, never an error

pub mod authority;
pub mod engine;
pub mod handler;

pub use engine::{RedirectDecision, RedirectPolicy, RedirectTarget, RequestView};
pub use handler::RedirectHandler;
