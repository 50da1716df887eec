//! Local HTTP endpoint standing in for a contact form webhook.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured POST for assertions.
#[derive(Debug, Clone)]
pub struct CapturedPost {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedPost {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("posted body is JSON")
    }
}

#[derive(Clone, Default)]
struct EndpointState {
    posts: Arc<Mutex<Vec<CapturedPost>>>,
    statuses: Arc<Mutex<VecDeque<u16>>>,
}

/// Answers `POST /contact` with queued status codes, 200 once the queue is empty.
pub struct MockEndpoint {
    pub addr: SocketAddr,
    state: EndpointState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockEndpoint {
    pub async fn start() -> Self {
        let state = EndpointState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/contact", post(handle_post))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock endpoint");
        let addr = listener.local_addr().expect("bound address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/contact", self.addr)
    }

    /// Status for the next unanswered POST.
    pub async fn enqueue_status(&self, status: u16) {
        self.state.statuses.lock().await.push_back(status);
    }

    pub async fn captured(&self) -> Vec<CapturedPost> {
        self.state.posts.lock().await.clone()
    }
}

impl Drop for MockEndpoint {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_post(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.posts.lock().await.push(CapturedPost {
        content_type,
        body: body.to_vec(),
    });

    let status = state.statuses.lock().await.pop_front().unwrap_or(200);
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
