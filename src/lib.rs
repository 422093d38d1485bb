//! HTTP authentication gate for a Thrift-over-HTTP RPC endpoint.
//!
//! Every request must carry an `Authorization` header: HTTP Basic, or
//! SPNEGO/Negotiate when the service runs with `AUTH_TYPE=KERBEROS`. The gate
//! resolves the caller, optionally completes a one-shot Kerberos accept under
//! the service's own credential, publishes the identity for the duration of
//! the request and only then hands the request to the RPC dispatcher. Every
//! failure is answered with `403` and never reaches the dispatcher.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
