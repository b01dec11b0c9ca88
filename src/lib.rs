//! HTTP redirector library.
//!
//! Redirects requests to HTTPS and/or the `www.` host, with a status
//! endpoint multiplexed onto the same listener by path prefix.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;
pub mod routing;
pub mod status;

pub use config::RedirectorConfig;
pub use http::{Handler, HttpServer};
pub use lifecycle::Shutdown;
pub use redirect::{RedirectDecision, RedirectHandler, RedirectPolicy};
pub use routing::StatusMux;
pub use status::{Checker, Status, StatusHandler};
