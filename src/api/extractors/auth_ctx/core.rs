use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AuthError;

use super::AuthCtx;

/// Handler で AuthCtx を受け取るための extractor
/// ゲートが AuthCtx を request.extensions() に insert 済みである前提
/// 見つからない場合はゲートが掛かっていないので、認証失敗と同じ 403 を返す
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(AuthError::MissingAuthHeader)
    }
}
