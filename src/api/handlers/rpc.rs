/*
 * Responsibility
 * - POST /{http_path}: 認証済みリクエストを RpcDispatcher にそのまま渡す
 * - レスポンスは dispatcher のものをそのまま返す (ゲートは何も足さない)
 */
use axum::{body::Body, extract::State, http::Request, response::Response};

use crate::api::extractors::AuthCtxExtractor;
use crate::state::AppState;

pub async fn rpc(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    req: Request<Body>,
) -> Response {
    tracing::trace!(user = %ctx.username, mode = %ctx.mode, "dispatching rpc");
    state.dispatcher.handle(req).await
}
