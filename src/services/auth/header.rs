//! Authorization header parsing.
//!
//! Every function here is pure: the same headers and mode always give the same
//! result, nothing is cached between calls.
//!
//! Payload format (both schemes): `<scheme> base64("<field0>:<field1>")`.
//! For Basic, field0/field1 are username and password (or delegation token).
//! For Kerberos, field1 carries the service ticket.

use axum::http::{HeaderMap, header};
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

use crate::error::AuthError;
use crate::services::auth::AuthMode;

// Clients disagree on padding; accept both forms.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The decoded payload split on the first `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub first: String,
    pub second: Option<String>,
}

/// Header Validator: the `Authorization` field must be present.
pub fn verify_auth_header(headers: &HeaderMap) -> Result<(), AuthError> {
    if headers.contains_key(header::AUTHORIZATION) {
        Ok(())
    } else {
        Err(AuthError::MissingAuthHeader)
    }
}

/// Decode the Authorization header into its (at most two) fields.
pub fn auth_header_fields(headers: &HeaderMap, mode: AuthMode) -> Result<HeaderFields, AuthError> {
    let raw = match headers.get(header::AUTHORIZATION) {
        None => return Err(AuthError::EmptyAuthHeader),
        Some(v) if v.is_empty() => return Err(AuthError::EmptyAuthHeader),
        Some(v) => v.to_str().map_err(|_| AuthError::UnreadableAuthHeader)?,
    };

    let payload = strip_scheme(raw, mode)?;
    if payload.is_empty() {
        return Err(AuthError::EmptyAuthPayload);
    }

    let decoded = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|_| AuthError::MalformedAuthPayload)?;
    let decoded = String::from_utf8_lossy(&decoded);

    let mut fields = decoded.splitn(2, ':');
    let first = fields.next().unwrap_or_default().to_string();
    let second = fields.next().map(str::to_string);

    Ok(HeaderFields { first, second })
}

/// Username (field0) from the header payload.
pub fn resolve_username(headers: &HeaderMap, mode: AuthMode) -> Result<String, AuthError> {
    let fields = auth_header_fields(headers, mode)?;
    if fields.first.is_empty() {
        return Err(AuthError::MissingUsername);
    }
    Ok(fields.first)
}

/// Password / delegation token (Basic) or service ticket (Kerberos) from field1.
pub fn resolve_pass_token(headers: &HeaderMap, mode: AuthMode) -> Result<String, AuthError> {
    let fields = auth_header_fields(headers, mode)?;
    match fields.second {
        Some(token) if !token.is_empty() => Ok(token),
        _ if mode.is_kerberos() => Err(AuthError::MissingServiceTicket),
        _ => Err(AuthError::MissingPassword),
    }
}

// Scheme tokens are case-insensitive (RFC 7235). A header carrying a different
// scheme is rejected instead of being cut at a fixed offset.
fn strip_scheme(raw: &str, mode: AuthMode) -> Result<&str, AuthError> {
    let scheme = mode.scheme();
    let mismatch = AuthError::SchemeMismatch { expected: scheme };

    let Some(head) = raw.get(..scheme.len()) else {
        return Err(mismatch);
    };
    if !head.eq_ignore_ascii_case(scheme) {
        return Err(mismatch);
    }

    let rest = &raw[scheme.len()..];
    if rest.trim().is_empty() {
        return Err(AuthError::EmptyAuthPayload);
    }
    match rest.strip_prefix(' ') {
        Some(payload) => Ok(payload.trim()),
        None => Err(mismatch),
    }
}
