//! Shared utilities for integration tests.

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// What the mock backend saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub requested_with: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// How the mock backend answers one request.
#[derive(Debug, Clone, Copy)]
pub struct MockReply {
    pub status: u16,
    pub body: &'static str,
    pub delay: Duration,
}

impl MockReply {
    pub fn json(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> MockReply + Send + Sync>;

#[derive(Clone)]
struct MockState {
    respond: Responder,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running mock backend answering every request with the same response.
pub struct MockBackend {
    pub addr: SocketAddr,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap().clone()
    }
}

/// Start a mock backend replying with `status` and a JSON `body`.
pub async fn start_json_backend(status: u16, body: &'static str) -> MockBackend {
    start_programmable_backend(move |_| MockReply::json(status, body)).await
}

/// Start a mock backend whose reply is chosen per request.
pub async fn start_programmable_backend<F>(respond: F) -> MockBackend
where
    F: Fn(&RecordedRequest) -> MockReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        respond: Arc::new(respond),
        log: log.clone(),
    };
    let app = Router::new().fallback(record).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend { addr, log }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        requested_with: header_str("x-requested-with"),
        content_type: header_str("content-type"),
        body,
    };
    let reply = (state.respond)(&request);
    state.log.lock().unwrap().push(request);

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// URL of a local port nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
