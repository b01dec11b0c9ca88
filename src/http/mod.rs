//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request id, trace span, timeout)
//!     → handler.rs (Handler chain: StatusMux → StatusHandler | RedirectHandler)
//!     → Send response to client
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use handler::Handler;
pub use request::{UuidRequestId, X_FORWARDED_PROTO, X_REQUEST_ID};
pub use server::{build_handler, HttpServer, ServerError};
