//! Host authority helpers.
//!
//! Splitting follows the usual `host:port` rules: the port follows the last
//! colon, IPv6 hosts must be bracketed when a port is present, and stray
//! brackets are rejected.

use std::net::IpAddr;

/// Split `host:port` into its parts.
///
/// Returns `None` when the authority has no port, has too many colons, or
/// contains misplaced brackets. An empty port (`example.com:`) is accepted.
pub fn split_host_port(authority: &str) -> Option<(&str, &str)> {
    let (host, port) = if let Some(rest) = authority.strip_prefix('[') {
        let end = rest.find(']')?;
        let after = &rest[end + 1..];
        // Only a `:port` suffix may follow the closing bracket.
        let port = after.strip_prefix(':')?;
        let host = &rest[..end];
        if host.contains('[') {
            return None;
        }
        (host, port)
    } else {
        let i = authority.rfind(':')?;
        let host = &authority[..i];
        if host.contains(':') || host.contains('[') || host.contains(']') {
            return None;
        }
        (host, &authority[i + 1..])
    };

    if port.contains('[') || port.contains(']') {
        return None;
    }
    Some((host, port))
}

/// Join a host and port, bracketing hosts that contain a colon.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Returns true if `host` is an IPv4 or IPv6 literal.
///
/// A bracketed IPv6 literal (`[::1]`) also counts.
pub fn is_ip_address(host: &str) -> bool {
    let literal = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    literal.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("example.com:8080"), Some(("example.com", "8080")));
        assert_eq!(split_host_port("127.0.0.1:80"), Some(("127.0.0.1", "80")));
        assert_eq!(split_host_port("[::1]:443"), Some(("::1", "443")));
        assert_eq!(split_host_port("example.com:"), Some(("example.com", "")));
    }

    #[test]
    fn test_split_host_port_failures() {
        assert_eq!(split_host_port("example.com"), None);
        assert_eq!(split_host_port("::1"), None);
        assert_eq!(split_host_port("[::1]"), None);
        assert_eq!(split_host_port("[::1]x:80"), None);
        assert_eq!(split_host_port("[::1:80"), None);
        assert_eq!(split_host_port("a]b:80"), None);
        assert_eq!(split_host_port(""), None);
    }

    #[test]
    fn test_join_host_port() {
        assert_eq!(join_host_port("www.example.com", "8080"), "www.example.com:8080");
        assert_eq!(join_host_port("::1", "80"), "[::1]:80");
    }

    #[test]
    fn test_is_ip_address() {
        assert!(is_ip_address("127.0.0.1"));
        assert!(is_ip_address("10.1.2.3"));
        assert!(is_ip_address("::1"));
        assert!(is_ip_address("2001:db8::8a2e:370:7334"));
        assert!(is_ip_address("::ffff:192.0.2.1"));
        assert!(is_ip_address("[::1]"));

        assert!(!is_ip_address("example.com"));
        assert!(!is_ip_address("127.0.0"));
        assert!(!is_ip_address("1.2.3.4.example"));
        assert!(!is_ip_address("256.1.1.1"));
        assert!(!is_ip_address("localhost"));
        assert!(!is_ip_address(""));
    }
}
