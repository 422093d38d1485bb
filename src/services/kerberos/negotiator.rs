//! One-shot Kerberos accept cycle.
//!
//! 1) accept-only credential for the krb5 mechanism, under the service identity
//! 2) fresh security context bound to it
//! 3) service ticket from the Negotiate header payload
//! 4) exactly one accept step; anything short of an established context fails
//!
//! Multi-leg SPNEGO is not supported: a context that asks for another round
//! trip is a failure.
use axum::http::HeaderMap;

use crate::error::AuthError;
use crate::services::auth::{AuthMode, resolve_pass_token};
use crate::services::kerberos::mechanism::{AcceptContext, KRB5_MECH_OID, MechanismError};
use crate::services::kerberos::service::ServiceIdentity;

/// Outcome of a successful negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiated {
    pub client_principal: Option<String>,
}

/// Verify the caller's service ticket. Blocking; run it off the async workers.
pub fn negotiate(service: &ServiceIdentity, headers: &HeaderMap) -> Result<Negotiated, AuthError> {
    service.run_as(|mechanism, principal| {
        let credential = mechanism
            .acquire_acceptor(principal, KRB5_MECH_OID)
            .map_err(handshake_failed)?;
        let mut ctx = ContextGuard::new(credential.new_context().map_err(handshake_failed)?);

        let ticket = resolve_pass_token(headers, AuthMode::Kerberos)?;
        ctx.accept(ticket.as_bytes()).map_err(handshake_failed)?;

        if !ctx.is_established() {
            return Err(AuthError::kerberos(
                "unable to establish context with the service ticket provided by the client.",
            ));
        }

        Ok(Negotiated {
            client_principal: ctx.source_name(),
        })
    })
}

fn handshake_failed(err: MechanismError) -> AuthError {
    AuthError::kerberos(err.to_string())
}

/// Owns a security context and releases it on every exit path.
struct ContextGuard {
    inner: Box<dyn AcceptContext>,
}

impl ContextGuard {
    fn new(inner: Box<dyn AcceptContext>) -> Self {
        Self { inner }
    }
}

impl std::ops::Deref for ContextGuard {
    type Target = dyn AcceptContext;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl std::ops::DerefMut for ContextGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut()
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        // Must not mask the negotiation outcome.
        if let Err(err) = self.inner.dispose() {
            tracing::debug!(error = %err, "failed to dispose security context");
        }
    }
}
