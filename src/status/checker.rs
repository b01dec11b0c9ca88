//! Service status values and the checker capability.

use serde::{Deserialize, Serialize};

/// Liveness of the service as reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Error,
}

/// Reports the current service status along with any errors being
/// experienced. A service may be online and still report errors.
pub trait Checker: Send + Sync {
    fn check(&self) -> (Status, Vec<String>);
}

impl<F> Checker for F
where
    F: Fn() -> (Status, Vec<String>) + Send + Sync,
{
    fn check(&self) -> (Status, Vec<String>) {
        self()
    }
}

/// Body of a status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl StatusSnapshot {
    /// Take a snapshot using `checker`, or report online when there is none.
    pub fn capture(checker: Option<&dyn Checker>, version: &str) -> Self {
        let (status, errors) = match checker {
            Some(checker) => checker.check(),
            None => (Status::Online, Vec::new()),
        };

        Self {
            status,
            version: version.to_string(),
            errors,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == Status::Online
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Online).unwrap(), r#""online""#);
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), r#""error""#);
    }

    #[test]
    fn test_capture_without_checker() {
        let snapshot = StatusSnapshot::capture(None, "");
        assert!(snapshot.is_online());
        assert!(snapshot.errors.is_empty());
    }

    #[test]
    fn test_capture_with_checker() {
        let checker = || (Status::Error, vec!["db down".to_string()]);
        let snapshot = StatusSnapshot::capture(Some(&checker), "2.0.0");

        assert!(!snapshot.is_online());
        assert_eq!(snapshot.version, "2.0.0");
        assert_eq!(snapshot.errors, vec!["db down"]);
    }
}
