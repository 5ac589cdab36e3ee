//! Stub search service for integration tests.
//!
//! Spins up an axum server on an ephemeral port that serves `POST /api/search`
//! and records every request it receives.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the stub answers one query.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

type Responder = dyn Fn(&str) -> Reply + Send + Sync;

struct Stub {
    respond: Box<Responder>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    pub base_url: String,
    stub: Arc<Stub>,
}

impl StubServer {
    /// Start a stub that answers every query with `reply`.
    pub async fn fixed(reply: Reply) -> Self {
        Self::start(move |_| reply.clone()).await
    }

    /// Start a stub whose reply depends on the query text.
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let stub = Arc::new(Stub {
            respond: Box::new(respond),
            recorded: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/search", post(handle_search))
            .with_state(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Stub has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            stub,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.stub.recorded.lock().unwrap().clone()
    }
}

async fn handle_search(
    State(stub): State<Arc<Stub>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let query = payload
        .get("request")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    stub.recorded.lock().unwrap().push(RecordedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: payload,
    });

    let reply = (stub.respond)(&query);
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe has no local address");
    drop(listener);
    format!("http://{addr}")
}
