//! Configuration loading from a TOML file and the process environment.
//!
//! Environment variables override file values:
//!
//! | Variable            | Field                              |
//! |---------------------|------------------------------------|
//! | `SSL`               | `redirect.upgrade_ssl`             |
//! | `WWW`               | `redirect.upgrade_www`             |
//! | `LISTEN`            | `listener.bind_address`            |
//! | `STATUS`            | `status.path`                      |
//! | `VERSION`           | `status.version`                   |
//! | `METRICS_LISTEN`    | `observability.metrics_address`    |
//! | `REDIRECTOR_CONFIG` | path of the TOML file to read first |

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RedirectorConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const CONFIG_PATH_VAR: &str = "REDIRECTOR_CONFIG";
pub const SSL_VAR: &str = "SSL";
pub const WWW_VAR: &str = "WWW";
pub const LISTEN_VAR: &str = "LISTEN";
pub const STATUS_VAR: &str = "STATUS";
pub const VERSION_VAR: &str = "VERSION";
pub const METRICS_LISTEN_VAR: &str = "METRICS_LISTEN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {name}: expected a boolean")]
    InvalidBool { name: String, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from the process environment.
pub fn from_env() -> Result<RedirectorConfig, ConfigError> {
    from_vars(|name| std::env::var(name).ok())
}

/// Load configuration using `lookup` to resolve variables.
///
/// Variables that are set but empty are ignored and keep their defaults.
pub fn from_vars<F>(lookup: F) -> Result<RedirectorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

    let mut config = match var(CONFIG_PATH_VAR) {
        Some(path) => read_config(Path::new(&path))?,
        None => RedirectorConfig::default(),
    };

    if let Some(value) = var(SSL_VAR) {
        config.redirect.upgrade_ssl = parse_bool(SSL_VAR, &value)?;
    }
    if let Some(value) = var(WWW_VAR) {
        config.redirect.upgrade_www = parse_bool(WWW_VAR, &value)?;
    }
    if let Some(value) = var(LISTEN_VAR) {
        config.listener.bind_address = normalize_listen(value);
    }
    if let Some(value) = var(STATUS_VAR) {
        config.status.path = value;
    }
    if let Some(value) = var(VERSION_VAR) {
        config.status.version = value;
    }
    if let Some(value) = var(METRICS_LISTEN_VAR) {
        config.observability.metrics_address = Some(value);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<RedirectorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Parse a boolean the way `1`, `t`, `TRUE`, `0`, `f`, `False`... are
/// conventionally accepted in environment variables.
pub fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// `:80` means all interfaces.
fn normalize_listen(value: String) -> String {
    if value.starts_with(':') {
        format!("0.0.0.0{}", value)
    } else {
        value
    }
}
