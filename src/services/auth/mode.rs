//! Configured authentication mode.
//!
//! The mode comes from configuration, never from the inbound header. Only
//! `KERBEROS` is recognised by name; every other configured value (`NONE`,
//! `LDAP`, `CUSTOM`, ...) is served with HTTP Basic credentials.
use std::fmt;
use std::str::FromStr;

const KERBEROS: &str = "KERBEROS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Basic,
    Kerberos,
}

impl AuthMode {
    /// Scheme token the client is expected to put in front of the payload.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Kerberos => "Negotiate",
        }
    }

    pub fn is_kerberos(&self) -> bool {
        matches!(self, Self::Kerberos)
    }
}

impl FromStr for AuthMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(KERBEROS) {
            Ok(Self::Kerberos)
        } else {
            Ok(Self::Basic)
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Kerberos => f.write_str("kerberos"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kerberos_is_matched_case_insensitively() {
        for raw in ["KERBEROS", "kerberos", "Kerberos", " KERBEROS "] {
            assert_eq!(raw.parse::<AuthMode>().unwrap(), AuthMode::Kerberos);
        }
    }

    #[test]
    fn everything_else_falls_back_to_basic() {
        for raw in ["NONE", "LDAP", "CUSTOM", "", "KERBEROS5"] {
            assert_eq!(raw.parse::<AuthMode>().unwrap(), AuthMode::Basic);
        }
    }
}
