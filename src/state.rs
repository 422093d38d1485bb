/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: 認証モード / サービス自身の ID / (任意) パスワード検証
 *   - dispatcher: ゲート通過後に呼ばれる RPC dispatcher
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::services::{auth::AuthSettings, dispatcher::RpcDispatcher};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthSettings>,
    pub dispatcher: Arc<dyn RpcDispatcher>,
}

impl AppState {
    pub fn new(auth: Arc<AuthSettings>, dispatcher: Arc<dyn RpcDispatcher>) -> Self {
        Self { auth, dispatcher }
    }
}
