//! Authorization ヘッダ検証 → 呼び出し元の確定 → (Kerberos なら) GSS accept → RPC へ
//!
//! Request flow:
//! - START: `Authorization` が無ければ REJECTED
//! - HEADER_CHECKED: payload の field0 を username として確定
//! - IDENTITY_SET: session slot に username を格納 (guard が解放を保証)
//! - KERBEROS_VERIFIED: Kerberos モードのみ、サービス自身の資格情報で 1 回だけ accept
//! - DISPATCHED → DONE: dispatcher が返った後に slot をクリア
//!
//! どの段階の失敗も 403 (application/x-thrift) で打ち切り、dispatcher は呼ばない。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::extractors::AuthCtx;
use crate::error::AuthError;
use crate::services::auth::{AuthMode, resolve_pass_token, resolve_username, verify_auth_header};
use crate::services::kerberos::{Negotiated, negotiate};
use crate::services::session;
use crate::state::AppState;

/// RPC ルートに認証ゲートを掛ける。
///
/// 例：
/// ```ignore
/// let rpc = Router::new().route("/cliservice", post(rpc));
/// let rpc = middleware::auth::gate::apply(rpc, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, gate_middleware))
}

async fn gate_middleware(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    // 1 リクエスト = 1 scope。前のリクエストの username は構造上見えない
    session::scope(async move {
        match authenticate_and_dispatch(&state, req, next).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "authentication failed");
                err.into_response()
            }
        }
    })
    .await
}

async fn authenticate_and_dispatch(
    state: &AppState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let settings = &state.auth;
    let mode = settings.mode;

    verify_auth_header(req.headers())?;

    let username = resolve_username(req.headers(), mode)?;
    let _identity = session::set_current_username(username.as_str());

    let mut auth_ctx = AuthCtx::new(username, mode);

    match mode {
        AuthMode::Kerberos => {
            let headers = req.headers().clone();
            let negotiated = kerberos_auth(state, headers).await?;
            if let Some(principal) = negotiated.client_principal.as_deref() {
                tracing::debug!(principal, "kerberos context established");
            }
            auth_ctx = auth_ctx.with_client_principal(negotiated.client_principal);
        }
        AuthMode::Basic => {
            if let Some(verifier) = settings.password_verifier.as_ref() {
                let password = resolve_pass_token(req.headers(), mode)?;
                if !verifier.verify(&auth_ctx.username, &password) {
                    return Err(AuthError::InvalidCredentials);
                }
            }
        }
    }

    tracing::debug!(
        username = %auth_ctx.username,
        auth_mode = %settings.auth_type,
        "HTTP Authorization header accepted"
    );

    // middleware → extractor / dispatcher への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

// GSS の accept はブロッキング呼び出しなので blocking pool で実行する
async fn kerberos_auth(state: &AppState, headers: HeaderMap) -> Result<Negotiated, AuthError> {
    let service = state
        .auth
        .service_identity
        .clone()
        .ok_or_else(|| AuthError::kerberos("service identity is not configured"))?;

    tokio::task::spawn_blocking(move || negotiate(&service, &headers))
        .await
        .map_err(|err| AuthError::kerberos(err.to_string()))?
}
