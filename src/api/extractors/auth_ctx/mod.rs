/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証ゲートが確定させた呼び出し元（AuthCtx）を handler / dispatcher に渡す
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use self::core::AuthCtxExtractor;
pub use types::AuthCtx;
