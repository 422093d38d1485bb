//! libgssapi-backed mechanism (MIT Kerberos / Heimdal).
//!
//! The keytab is picked up by the GSS library itself (`KRB5_KTNAME`).
use libgssapi::{
    context::{SecurityContext, ServerCtx},
    credential::{Cred, CredUsage},
    name::Name,
    oid::{GSS_MECH_KRB5, GSS_NT_KRB5_PRINCIPAL, OidSet},
};

use crate::services::kerberos::mechanism::{
    AcceptContext, AcceptCredential, GssMechanism, KRB5_MECH_OID, MechanismError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Krb5Mechanism;

impl Krb5Mechanism {
    pub fn new() -> Self {
        Self
    }
}

impl GssMechanism for Krb5Mechanism {
    fn name(&self) -> &'static str {
        "libgssapi"
    }

    fn acquire_acceptor(
        &self,
        principal: Option<&str>,
        mech_oid: &str,
    ) -> Result<Box<dyn AcceptCredential>, MechanismError> {
        if mech_oid != KRB5_MECH_OID {
            return Err(MechanismError::UnsupportedMechanism(mech_oid.to_string()));
        }

        let name = principal
            .map(|p| {
                Name::new(p.as_bytes(), Some(&GSS_NT_KRB5_PRINCIPAL))
                    .and_then(|n| n.canonicalize(Some(&GSS_MECH_KRB5)))
                    .map_err(|e| MechanismError::InvalidPrincipal {
                        principal: p.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        let mut mechs = OidSet::new().map_err(|e| MechanismError::Credential(e.to_string()))?;
        mechs
            .add(&GSS_MECH_KRB5)
            .map_err(|e| MechanismError::Credential(e.to_string()))?;

        // lifetime None => GSS_C_INDEFINITE / library default
        let cred = Cred::acquire(name.as_ref(), None, CredUsage::Accept, Some(&mechs))
            .map_err(|e| MechanismError::Credential(e.to_string()))?;

        Ok(Box::new(Krb5Credential { cred }))
    }
}

struct Krb5Credential {
    cred: Cred,
}

impl AcceptCredential for Krb5Credential {
    fn new_context(self: Box<Self>) -> Result<Box<dyn AcceptContext>, MechanismError> {
        Ok(Box::new(Krb5Context {
            inner: Some(ServerCtx::new(Some(self.cred))),
        }))
    }
}

struct Krb5Context {
    inner: Option<ServerCtx>,
}

impl Krb5Context {
    fn ctx(&mut self) -> Result<&mut ServerCtx, MechanismError> {
        self.inner
            .as_mut()
            .ok_or_else(|| MechanismError::Context("security context already disposed".into()))
    }
}

impl AcceptContext for Krb5Context {
    fn accept(&mut self, token: &[u8]) -> Result<Option<Vec<u8>>, MechanismError> {
        let reply = self
            .ctx()?
            .step(token)
            .map_err(|e| MechanismError::Context(e.to_string()))?;
        Ok(reply.map(|buf| buf.to_vec()))
    }

    fn is_established(&self) -> bool {
        self.inner.as_ref().is_some_and(|ctx| ctx.is_complete())
    }

    fn source_name(&mut self) -> Option<String> {
        let ctx = self.ctx().ok()?;
        ctx.source_name().ok().map(|name| name.to_string())
    }

    fn dispose(&mut self) -> Result<(), MechanismError> {
        // gss_delete_sec_context runs in ServerCtx::drop
        drop(self.inner.take());
        Ok(())
    }
}
