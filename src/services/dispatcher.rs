//! RPC dispatcher behind the gate.
//!
//! The gate hands over the request untouched; the authenticated identity rides
//! along in the request extensions (`AuthCtx`) and in the session slot.
use async_trait::async_trait;
use axum::{
    body::{Body, to_bytes},
    http::{HeaderValue, Request, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::extractors::AuthCtx;
use crate::error::THRIFT_CONTENT_TYPE;

/// Must only ever be called for authenticated requests.
#[async_trait]
pub trait RpcDispatcher: Send + Sync + 'static {
    async fn handle(&self, request: Request<Body>) -> Response;
}

/// Returns the request payload as the response payload.
///
/// Stand-in for the real processor when running the gate on its own
/// (smoke tests, client bring-up).
#[derive(Debug, Clone)]
pub struct EchoDispatcher {
    max_body_bytes: usize,
}

impl EchoDispatcher {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}

#[async_trait]
impl RpcDispatcher for EchoDispatcher {
    async fn handle(&self, request: Request<Body>) -> Response {
        let username = request
            .extensions()
            .get::<AuthCtx>()
            .map(|ctx| ctx.username.clone());

        let body = match to_bytes(request.into_body(), self.max_body_bytes).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read rpc payload");
                return StatusCode::BAD_REQUEST.into_response();
            }
        };

        tracing::debug!(user = ?username, bytes = body.len(), "echo dispatch");

        let mut response = body.into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(THRIFT_CONTENT_TYPE),
        );
        response
    }
}
