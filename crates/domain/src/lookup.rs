//! Own-IP lookup types.
//!
//! The IP-echo service answers `{ "ip": "<address>" }`. The record is held
//! only for display and replaced wholesale on the next lookup.

use serde::{Deserialize, Serialize};

/// The caller's public IP address as reported by the echo service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnIp {
    /// The address string exactly as the service returned it.
    pub ip: String,
}

/// Outcome of an own-IP lookup, mapped to a single display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnIpReport {
    /// The echo service answered with an address.
    Resolved(OwnIp),

    /// The call failed (transport, HTTP status, or decode).
    Failed,
}

impl OwnIpReport {
    /// The line shown in the own-IP label.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Resolved(own_ip) => format!("IP: {}", own_ip.ip),
            Self::Failed => "Error fetching IP".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolved_report_formats_address() {
        let report = OwnIpReport::Resolved(OwnIp {
            ip: "203.0.113.7".to_string(),
        });
        assert_eq!(report.display(), "IP: 203.0.113.7");
    }

    #[test]
    fn failed_report_uses_fixed_string() {
        assert_eq!(OwnIpReport::Failed.display(), "Error fetching IP");
    }

    #[test]
    fn own_ip_deserializes_from_echo_payload() {
        let own_ip: OwnIp = serde_json::from_str(r#"{"ip":"198.51.100.2"}"#).unwrap();
        assert_eq!(own_ip.ip, "198.51.100.2");
    }
}
