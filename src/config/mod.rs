//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file ($REDIRECTOR_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (SSL, WWW, LISTEN, STATUS, ...)
//!     → validation.rs (semantic checks)
//!     → RedirectorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never changes afterwards
//! - All fields have defaults to allow running with no configuration at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, from_vars, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, RedirectConfig, RedirectorConfig,
    StatusConfig, TimeoutConfig,
};
pub use validation::ValidationError;
