//! The service's own long-lived Kerberos identity.
use std::fmt;
use std::sync::Arc;

use tracing::info_span;

use crate::services::kerberos::mechanism::{GssMechanism, KRB5_MECH_OID, MechanismError};

/// Created once at startup, shared read-only by every request that negotiates.
#[derive(Clone)]
pub struct ServiceIdentity {
    principal: Option<String>,
    mechanism: Arc<dyn GssMechanism>,
}

impl ServiceIdentity {
    /// Log the service in: acquire its accept credential once so a broken
    /// keytab or principal fails startup instead of the first request.
    pub fn login(
        principal: Option<String>,
        mechanism: Arc<dyn GssMechanism>,
    ) -> Result<Self, MechanismError> {
        mechanism.acquire_acceptor(principal.as_deref(), KRB5_MECH_OID)?;

        tracing::info!(
            principal = principal.as_deref().unwrap_or("<default>"),
            backend = mechanism.name(),
            "service identity ready"
        );

        Ok(Self {
            principal,
            mechanism,
        })
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    /// Run `action` as the service, never as the (unauthenticated) caller.
    pub fn run_as<T>(&self, action: impl FnOnce(&dyn GssMechanism, Option<&str>) -> T) -> T {
        let span = info_span!(
            "service_identity",
            principal = self.principal().unwrap_or("<default>")
        );
        let _entered = span.enter();

        action(self.mechanism.as_ref(), self.principal())
    }
}

impl fmt::Debug for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceIdentity")
            .field("principal", &self.principal)
            .field("backend", &self.mechanism.name())
            .finish()
    }
}
