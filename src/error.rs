/*
 * Responsibility
 * - 認証ゲートのエラー分類 (AuthError)
 * - IntoResponse 実装: どの失敗も 403 + application/x-thrift に統一する
 * - RPC クライアントがプロトコル隣接の拒否として扱えるよう、本文は 1 行のテキスト
 */
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Content type used by the RPC transport; rejections reuse it.
pub const THRIFT_CONTENT_TYPE: &str = "application/x-thrift";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Request contains no Authorization header.")]
    MissingAuthHeader,

    #[error("Authorization header received from the client is empty.")]
    EmptyAuthHeader,

    #[error("Authorization header received from the client is not readable text.")]
    UnreadableAuthHeader,

    #[error("Authorization header received from the client does not use the {expected} scheme.")]
    SchemeMismatch { expected: &'static str },

    #[error("Authorization header received from the client does not contain any data.")]
    EmptyAuthPayload,

    #[error("Authorization header received from the client is not valid base64.")]
    MalformedAuthPayload,

    #[error("Authorization header received from the client does not contain username.")]
    MissingUsername,

    #[error("Authorization header received from the client does not contain the service ticket.")]
    MissingServiceTicket,

    #[error("Authorization header received from the client does not contain the password.")]
    MissingPassword,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Kerberos authentication failed: {reason}")]
    KerberosHandshakeFailed { reason: String },
}

impl AuthError {
    pub fn kerberos(reason: impl Into<String>) -> Self {
        Self::KerberosHandshakeFailed {
            reason: reason.into(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = format!("Authentication Error: {self}\n");

        let mut response = (StatusCode::FORBIDDEN, body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(THRIFT_CONTENT_TYPE),
        );
        response
    }
}
