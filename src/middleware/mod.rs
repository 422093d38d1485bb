/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: RPC ルート専用の認証ゲート
 * - http: 全ルート共通の横断的関心事
 */
pub mod auth;
pub mod http;
