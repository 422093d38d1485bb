//! GSS mechanism seam.
//!
//! The gate never talks to a GSS library directly. It asks a `GssMechanism` for
//! an accept-only credential, opens one context from it and feeds it one token.
//! The libgssapi-backed implementation lives in `kerberos::gssapi`; tests plug
//! in their own.
use thiserror::Error;

/// Kerberos v5 GSS-API mechanism.
pub const KRB5_MECH_OID: &str = "1.2.840.113554.1.2.2";

#[derive(Debug, Error)]
pub enum MechanismError {
    #[error("unsupported mechanism: {0}")]
    UnsupportedMechanism(String),
    #[error("invalid principal `{principal}`: {reason}")]
    InvalidPrincipal { principal: String, reason: String },
    #[error("failed to acquire credentials: {0}")]
    Credential(String),
    #[error("{0}")]
    Context(String),
}

/// Produces accept-side credentials for the service.
pub trait GssMechanism: Send + Sync + 'static {
    // Backend name (for logging).
    fn name(&self) -> &'static str;

    // Accept-only credential for `principal` (default acceptor when `None`),
    // with the mechanism's default lifetime.
    fn acquire_acceptor(
        &self,
        principal: Option<&str>,
        mech_oid: &str,
    ) -> Result<Box<dyn AcceptCredential>, MechanismError>;
}

pub trait AcceptCredential {
    fn new_context(self: Box<Self>) -> Result<Box<dyn AcceptContext>, MechanismError>;
}

/// One server-side security context.
pub trait AcceptContext {
    // Process one client token. Returns the reply token, if any.
    fn accept(&mut self, token: &[u8]) -> Result<Option<Vec<u8>>, MechanismError>;

    fn is_established(&self) -> bool;

    // Client principal once the context is established.
    fn source_name(&mut self) -> Option<String>;

    // Release the underlying resources. Called exactly once by `ContextGuard`.
    fn dispose(&mut self) -> Result<(), MechanismError>;
}
