//! Access protocol identifiers
//!
//! The set of protocols whose endpoints can be captured is closed: adding a
//! protocol means adding a variant here and a result slot everywhere slots
//! are seeded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An identifier named a protocol outside the supported set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported access protocol: '{0}'")]
pub struct UnknownProtocol(pub String);

/// Access protocols with capturable endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessProtocol {
    Http,
    Https,
}

impl AccessProtocol {
    /// Every supported protocol, in a stable order
    pub const ALL: [AccessProtocol; 2] = [AccessProtocol::Http, AccessProtocol::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// URL scheme used when building the capture target address
    pub fn scheme(&self) -> &'static str {
        self.as_str()
    }

    /// Default port for the protocol, used when an endpoint does not name one
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

impl fmt::Display for AccessProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessProtocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(UnknownProtocol(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_protocols() {
        assert_eq!("http".parse::<AccessProtocol>().unwrap(), AccessProtocol::Http);
        assert_eq!("https".parse::<AccessProtocol>().unwrap(), AccessProtocol::Https);
        assert_eq!("HTTPS".parse::<AccessProtocol>().unwrap(), AccessProtocol::Https);
    }

    #[test]
    fn test_parse_unknown_protocol() {
        let err = "gopher".parse::<AccessProtocol>().unwrap_err();
        assert_eq!(err, UnknownProtocol("gopher".to_string()));
        assert!(err.to_string().contains("gopher"));
    }

    #[test]
    fn test_display_matches_wire_form() {
        for protocol in AccessProtocol::ALL {
            let wire = serde_json::to_string(&protocol).unwrap();
            assert_eq!(wire, format!("\"{}\"", protocol));
        }
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(AccessProtocol::Http.default_port(), 80);
        assert_eq!(AccessProtocol::Https.default_port(), 443);
    }
}
