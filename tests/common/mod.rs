//! Shared utilities for integration testing.
//!
//! Provides a recording mock upstream and a helper that spawns the gateway
//! on an ephemeral port in front of it.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use helpdesk_gateway::config::GatewayConfig;
use helpdesk_gateway::http::HttpServer;

/// One request as seen by the mock upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    #[allow(dead_code)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body is not JSON")
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<(u16, String)>>,
    delay: Arc<Mutex<Duration>>,
}

/// Programmable mock upstream that records every request it receives.
#[derive(Clone)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockUpstream {
    /// Bind an ephemeral port and start serving.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new((200, r#"{"ok":true}"#.to_string()))),
            delay: Arc::new(Mutex::new(Duration::ZERO)),
        };

        let app = Router::new().fallback(record).with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Base URL the gateway should be pointed at (with the /api prefix the
    /// real upstream mounts its routes under).
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Program the next responses.
    pub fn set_response(&self, status: u16, body: &str) {
        *self.state.response.lock().unwrap() = (status, body.to_string());
    }

    /// Delay every response, for timeout tests.
    #[allow(dead_code)]
    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = delay;
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Most recent request; panics if none arrived.
    #[allow(dead_code)]
    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .last()
            .cloned()
            .expect("mock upstream received no request")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri
            .path_and_query()
            .map(|p| p.to_string())
            .unwrap_or_else(|| uri.path().to_string()),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: body.to_vec(),
    });

    let delay = *state.delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let (status, body) = state.response.lock().unwrap().clone();
    (
        StatusCode::from_u16(status).unwrap(),
        [("content-type", "application/json")],
        body,
    )
        .into_response()
}

/// Spawn the gateway on an ephemeral port, pointed at the given upstream.
pub async fn start_gateway(upstream_base_url: &str) -> SocketAddr {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = upstream_base_url.to_string();
    config.upstream.timeout_secs = 2;
    start_gateway_with(config).await
}

/// Spawn the gateway with a fully custom configuration.
#[allow(dead_code)]
pub async fn start_gateway_with(config: GatewayConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A reqwest client suitable for talking to the spawned gateway.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
