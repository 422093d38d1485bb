//! Optional Basic-mode credential check.
//!
//! Without a verifier the gate only resolves *who* the caller claims to be.
//! Delegation-token and directory-backed checks plug in behind the same trait.
use std::collections::HashMap;

use subtle::ConstantTimeEq;

pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// In-memory `user -> password` table, loaded from configuration.
///
/// Debug output never includes the passwords.
#[derive(Clone, Default)]
pub struct StaticPasswordVerifier {
    users: HashMap<String, String>,
}

impl StaticPasswordVerifier {
    pub fn new<I, U, P>(users: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: users
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    /// Parse `alice:pw,bob:secret`. Entries without a `:` or with an empty
    /// username are skipped.
    pub fn parse(spec: &str) -> Self {
        let users = spec
            .split(',')
            .map(str::trim)
            .filter_map(|entry| entry.split_once(':'))
            .filter(|(user, _)| !user.is_empty());
        Self::new(users)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl std::fmt::Debug for StaticPasswordVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticPasswordVerifier")
            .field("users", &self.users.len())
            .finish()
    }
}

impl PasswordVerifier for StaticPasswordVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| ct_eq(password.as_bytes(), expected.as_bytes()))
    }
}

fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_malformed_entries() {
        let verifier = StaticPasswordVerifier::parse("alice:pw, bob:s:e:c, broken, :nouser,");

        assert_eq!(verifier.len(), 2);
        assert!(verifier.verify("alice", "pw"));
        assert!(verifier.verify("bob", "s:e:c"));
    }

    #[test]
    fn wrong_or_unknown_credentials_are_refused() {
        let verifier = StaticPasswordVerifier::new([("admin", "admin123")]);

        assert!(!verifier.verify("admin", "admin"));
        assert!(!verifier.verify("root", "admin123"));
    }

    #[test]
    fn debug_hides_passwords() {
        let verifier = StaticPasswordVerifier::new([("admin", "admin123")]);
        assert!(!format!("{verifier:?}").contains("admin123"));
    }
}
