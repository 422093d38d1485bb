/*
 * Responsibility
 * - HTTP 面の公開ポイント (routes() の re-export など)
 * - RPC エンドポイントはゲート付き、/health はゲートなし
 */
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
