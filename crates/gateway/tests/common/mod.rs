//! In-process stub backend for gateway integration tests.
//!
//! Each test starts an axum server on `127.0.0.1:0`, mounts its routes
//! under `/api` (matching the production base path) and points a
//! [`GatewayClient`] at it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

use ramadan_gateway::{GatewayClient, GatewayConfig};

/// One request as seen by the stub backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    /// Parsed JSON body, `None` when the request had no (JSON) body.
    pub body: Option<serde_json::Value>,
}

struct CannedState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<Recorded>>,
}

/// Stub that answers every request with one canned response and records
/// what it received.
pub struct StubBackend {
    pub client: GatewayClient,
    pub addr: SocketAddr,
    state: Arc<CannedState>,
}

impl StubBackend {
    /// Answer every request with `status` and the raw `body` text.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let state = Arc::new(CannedState {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(record_and_respond)
            .with_state(Arc::clone(&state));
        let addr = serve(router).await;
        Self {
            client: client_for(addr),
            addr,
            state,
        }
    }

    /// Answer every request with `200 OK` and `body` as JSON.
    pub async fn ok(body: serde_json::Value) -> Self {
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only request received; fails the test otherwise.
    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn record_and_respond(
    State(state): State<Arc<CannedState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let recorded = Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().unwrap().push(recorded);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Serve `routes` under `/api` and return a client pointed at them.
pub async fn spawn_routes(routes: Router) -> GatewayClient {
    let addr = serve(Router::new().nest("/api", routes)).await;
    client_for(addr)
}

/// Bind an ephemeral port, serve `router` on it in the background.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub fn client_for(addr: SocketAddr) -> GatewayClient {
    GatewayClient::new(GatewayConfig::new(format!("http://{addr}/api"))).unwrap()
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn imam_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("imam{id}@masjid.org"),
        "expertise": "Quran & Islamic Law",
        "is_available": true,
        "bio": "Teaches tafsir on weekends"
    })
}

pub fn video_json(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "channel": "Yaqeen Institute",
        "duration": "12:40",
        "youtube_id": format!("yt{id}"),
        "description": "A reminder for the last ten nights",
        "thumbnail_url": null,
        "keywords": []
    })
}
