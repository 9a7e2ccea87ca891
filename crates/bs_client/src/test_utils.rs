//! In-process stand-in for the search backend, used by the unit tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Default)]
struct BackendState {
    requests: Mutex<Vec<RecordedRequest>>,
    fail_all: Mutex<Option<u16>>,
    failures: Mutex<HashMap<String, u16>>,
    garbage: Mutex<bool>,
    random_body: Mutex<Option<Value>>,
    delays: Mutex<HashMap<String, Duration>>,
}

pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state = Arc::new(BackendState::default());
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state, handle }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn fail_all(&self, status: u16) {
        *self.state.fail_all.lock().unwrap() = Some(status);
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.state.failures.lock().unwrap().insert(path.to_string(), status);
    }

    pub fn serve_garbage(&self) {
        *self.state.garbage.lock().unwrap() = true;
    }

    pub fn set_random(&self, body: Value) {
        *self.state.random_body.lock().unwrap() = Some(body);
    }

    /// Holds back `/search` responses for the given query.
    pub fn delay_search(&self, query: &str, delay: Duration) {
        self.state.delays.lock().unwrap().insert(query.to_string(), delay);
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn long_summary() -> String {
    "word ".repeat(60)
}

async fn respond(
    State(state): State<Arc<BackendState>>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        query: query.clone(),
    });

    let delay = query
        .get("q")
        .and_then(|q| state.delays.lock().unwrap().get(q).copied());
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let status = state
        .fail_all
        .lock()
        .unwrap()
        .or_else(|| state.failures.lock().unwrap().get(&path).copied());
    if let Some(status) = status {
        let status = StatusCode::from_u16(status).unwrap();
        return (status, Json(json!({"error": "backend failure"}))).into_response();
    }

    if *state.garbage.lock().unwrap() {
        return (StatusCode::OK, "{not json").into_response();
    }

    match path.as_str() {
        "/search" => search_body(query.get("q").map(String::as_str).unwrap_or("")).into_response(),
        "/random" => {
            let body = state.random_body.lock().unwrap().clone();
            Json(body.unwrap_or_else(|| {
                json!({
                    "title": "Random pick",
                    "link": "https://random.example.com/post",
                    "summary": "Picked at random.",
                    "blog_name": "Random Blog",
                    "published": "2024-01-05T08:00:00"
                })
            }))
            .into_response()
        }
        "/stats" => Json(json!({
            "total_articles": 12345,
            "total_blogs": 2,
            "articles_per_blog": {"Example Blog": 2, "Another Blog": 1},
            "last_updated": "2024-01-06T12:00:00"
        }))
        .into_response(),
        "/blogs" => Json(json!({
            "Example Blog": {"count": 2, "latest": "2024-01-05T09:30:00"},
            "Another Blog": {"count": 1, "latest": null}
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn search_body(q: &str) -> Json<Value> {
    match q {
        "nothing-matches" => Json(json!([])),
        "long" => Json(json!([{
            "title": "Long read",
            "link": "https://example.com/long",
            "summary": long_summary(),
            "blog_name": "Example Blog",
            "published": "2024-01-05"
        }])),
        "sparse" => Json(json!([{"link": "https://example.com/sparse"}])),
        _ => Json(json!([
            {
                "title": "First post",
                "link": "https://example.com/first",
                "summary": format!("About {}", q),
                "blog_name": "Example Blog",
                "published": "2024-01-05T09:30:00"
            },
            {
                "title": "Second post",
                "link": "https://example.com/second",
                "summary": "",
                "blog_name": "Another Blog",
                "published": null
            }
        ])),
    }
}
