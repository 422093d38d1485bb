use std::fmt;
use std::sync::Arc;

use crate::services::auth::{AuthMode, PasswordVerifier};
use crate::services::kerberos::ServiceIdentity;

/// Everything the gate needs to decide on a request. Built once at startup.
pub struct AuthSettings {
    // Configured value as given (logged with each accepted request).
    pub auth_type: String,
    pub mode: AuthMode,
    pub service_identity: Option<ServiceIdentity>,
    pub password_verifier: Option<Arc<dyn PasswordVerifier>>,
}

impl AuthSettings {
    pub fn basic(auth_type: impl Into<String>) -> Self {
        Self {
            auth_type: auth_type.into(),
            mode: AuthMode::Basic,
            service_identity: None,
            password_verifier: None,
        }
    }

    pub fn kerberos(auth_type: impl Into<String>, service_identity: ServiceIdentity) -> Self {
        Self {
            auth_type: auth_type.into(),
            mode: AuthMode::Kerberos,
            service_identity: Some(service_identity),
            password_verifier: None,
        }
    }

    pub fn with_password_verifier(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.password_verifier = Some(verifier);
        self
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("auth_type", &self.auth_type)
            .field("mode", &self.mode)
            .field("service_identity", &self.service_identity)
            .field("password_verifier", &self.password_verifier.is_some())
            .finish()
    }
}
