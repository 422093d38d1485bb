#[cfg(feature = "gssapi")]
pub mod gssapi;
pub mod mechanism;
pub mod negotiator;
pub mod service;

#[cfg(feature = "gssapi")]
pub use gssapi::Krb5Mechanism;
pub use mechanism::{AcceptContext, AcceptCredential, GssMechanism, KRB5_MECH_OID, MechanismError};
pub use negotiator::{Negotiated, negotiate};
pub use service::ServiceIdentity;
