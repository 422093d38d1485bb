/*
 * Responsibility
 * - ゲートを通過したリクエストに付く「認証済みコンテキスト」の型
 * - middleware が request extensions に格納し、handler / dispatcher はこの型だけを見る
 *
 * Notes
 * - 誰が呼んだか (authn) だけを表す。何をしてよいか (authz) は持たない
 */
use crate::services::auth::AuthMode;

/// Identity resolved for one request.
///
/// - `username` is field0 of the Authorization payload
/// - `client_principal` is only set when a Kerberos context reported one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub username: String,
    pub mode: AuthMode,
    pub client_principal: Option<String>,
}

impl AuthCtx {
    pub fn new(username: impl Into<String>, mode: AuthMode) -> Self {
        Self {
            username: username.into(),
            mode,
            client_principal: None,
        }
    }

    pub fn with_client_principal(mut self, principal: Option<String>) -> Self {
        self.client_principal = principal;
        self
    }
}
