//! Status endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! GET /<status prefix>
//!     → handler.rs (method check)
//!     → checker.rs (optional Checker → StatusSnapshot)
//!     → JSON body, 200 online / 503 error
//! ```

pub mod checker;
pub mod handler;

pub use checker::{Checker, Status, StatusSnapshot};
pub use handler::StatusHandler;
