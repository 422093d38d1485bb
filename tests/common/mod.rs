#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderValue, Request, StatusCode, header},
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use thrift_http_auth::api::extractors::AuthCtx;
use thrift_http_auth::app::build_router;
use thrift_http_auth::config::Config;
use thrift_http_auth::services::auth::AuthSettings;
use thrift_http_auth::services::dispatcher::RpcDispatcher;
use thrift_http_auth::services::kerberos::{
    AcceptContext, AcceptCredential, GssMechanism, MechanismError, ServiceIdentity,
};
use thrift_http_auth::services::session;
use thrift_http_auth::state::AppState;

pub const VALID_TICKET: &[u8] = b"valid-ticket";
pub const CLIENT_PRINCIPAL: &str = "alice@EXAMPLE.COM";

/// What the dispatcher saw for one call.
#[derive(Debug, Clone)]
pub struct Seen {
    pub ctx: Option<AuthCtx>,
    pub session_username: Option<String>,
}

#[derive(Default)]
pub struct RecordingDispatcher {
    seen: Mutex<Vec<Seen>>,
}

impl RecordingDispatcher {
    pub fn calls(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcDispatcher for RecordingDispatcher {
    async fn handle(&self, request: Request<Body>) -> Response {
        self.seen.lock().unwrap().push(Seen {
            ctx: request.extensions().get::<AuthCtx>().cloned(),
            session_username: session::current_username(),
        });

        let mut response = (StatusCode::OK, "rpc-reply").into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-thrift"),
        );
        response
    }
}

/// Accepts exactly `VALID_TICKET`; anything else fails like a real acceptor
/// fed a defective token.
#[derive(Default)]
pub struct StubKrb5 {
    pub disposed: Arc<AtomicUsize>,
}

impl StubKrb5 {
    pub fn disposed(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }
}

struct StubCredential {
    disposed: Arc<AtomicUsize>,
}

struct StubContext {
    disposed: Arc<AtomicUsize>,
    established: bool,
}

impl GssMechanism for StubKrb5 {
    fn name(&self) -> &'static str {
        "stub-krb5"
    }

    fn acquire_acceptor(
        &self,
        _principal: Option<&str>,
        _mech_oid: &str,
    ) -> Result<Box<dyn AcceptCredential>, MechanismError> {
        Ok(Box::new(StubCredential {
            disposed: self.disposed.clone(),
        }))
    }
}

impl AcceptCredential for StubCredential {
    fn new_context(self: Box<Self>) -> Result<Box<dyn AcceptContext>, MechanismError> {
        Ok(Box::new(StubContext {
            disposed: self.disposed,
            established: false,
        }))
    }
}

impl AcceptContext for StubContext {
    fn accept(&mut self, token: &[u8]) -> Result<Option<Vec<u8>>, MechanismError> {
        if token == VALID_TICKET {
            self.established = true;
            Ok(None)
        } else {
            Err(MechanismError::Context("Defective token detected".into()))
        }
    }

    fn is_established(&self) -> bool {
        self.established
    }

    fn source_name(&mut self) -> Option<String> {
        self.established.then(|| CLIENT_PRINCIPAL.to_string())
    }

    fn dispose(&mut self) -> Result<(), MechanismError> {
        self.disposed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

pub fn basic_settings() -> AuthSettings {
    AuthSettings::basic("NONE")
}

pub fn kerberos_settings(mechanism: Arc<StubKrb5>) -> AuthSettings {
    let principal = Some("HTTP/gate.example.com@EXAMPLE.COM".to_string());
    let service = ServiceIdentity::login(principal, mechanism).unwrap();
    AuthSettings::kerberos("KERBEROS", service)
}

pub fn app(settings: AuthSettings, dispatcher: Arc<dyn RpcDispatcher>) -> Router {
    let state = AppState::new(Arc::new(settings), dispatcher);
    build_router(state, &test_config())
}

pub fn rpc_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder =
        Request::post("/cliservice").header(header::CONTENT_TYPE, "application/x-thrift");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from("thrift-payload")).unwrap()
}

pub fn basic(payload: &str) -> String {
    format!("Basic {}", STANDARD.encode(payload))
}

pub fn negotiate(payload: &[u8]) -> String {
    format!("Negotiate {}", STANDARD.encode(payload))
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
