pub mod auth;
pub mod dispatcher;
pub mod kerberos;
pub mod session;
