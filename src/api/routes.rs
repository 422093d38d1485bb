/*
 * Responsibility
 * - URL 構造を定義
 * - POST /{http_path} (RPC) にだけ認証ゲートを route_layer で掛ける
 * - /health は疎通確認用にゲートの外
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{health::health, rpc::rpc};
use crate::middleware::auth::gate;
use crate::state::AppState;

pub fn routes(state: AppState, http_path: &str) -> Router<AppState> {
    let rpc_path = format!("/{}", http_path.trim_matches('/'));

    let gated = Router::new().route(&rpc_path, post(rpc));
    let gated = gate::apply(gated, state);

    Router::new().route("/health", get(health)).merge(gated)
}
