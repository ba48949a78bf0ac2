// Transport retry behavior against an in-process backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use hrms_client::{ClientConfig, HttpTransport};
use shared::{LoginResponse, MessageResponse};

#[derive(Default)]
struct Hits {
    flaky: AtomicU32,
    broken: AtomicU32,
    rejected: AtomicU32,
    garbled: AtomicU32,
}

async fn flaky(State(hits): State<Arc<Hits>>) -> impl IntoResponse {
    let n = hits.flaky.fetch_add(1, Ordering::SeqCst);
    if n < 2 {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"})))
    } else {
        (StatusCode::OK, Json(json!({"message": "ok"})))
    }
}

async fn broken(State(hits): State<Arc<Hits>>) -> impl IntoResponse {
    hits.broken.fetch_add(1, Ordering::SeqCst);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "still down"})))
}

async fn rejected(State(hits): State<Arc<Hits>>) -> impl IntoResponse {
    hits.rejected.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Invalid employee credentials"})),
    )
}

async fn garbled(State(hits): State<Arc<Hits>>) -> impl IntoResponse {
    hits.garbled.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, "this is not json".to_string())
}

async fn spawn_backend() -> (String, Arc<Hits>) {
    let hits = Arc::new(Hits::default());
    let app = Router::new()
        .route("/flaky", get(flaky))
        .route("/broken", get(broken))
        .route("/rejected", get(rejected))
        .route("/garbled", get(garbled))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), hits)
}

fn transport(base_url: &str, base_delay_ms: u64) -> HttpTransport {
    let config = ClientConfig::new(base_url)
        .with_retry(3, Duration::from_millis(base_delay_ms));
    HttpTransport::new(&config).unwrap()
}

#[tokio::test]
async fn transient_failures_are_retried_until_success() {
    let (base_url, hits) = spawn_backend().await;
    let transport = transport(&base_url, 5);

    let resp: MessageResponse = transport.get("/flaky").await.unwrap();
    assert_eq!(resp.message, "ok");
    assert_eq!(hits.flaky.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn attempts_are_bounded_and_last_error_propagates() {
    let (base_url, hits) = spawn_backend().await;
    let transport = transport(&base_url, 5);

    let err = transport.get::<MessageResponse>("/broken").await.unwrap_err();
    assert_eq!(hits.broken.load(Ordering::SeqCst), 3);
    // The server-provided message survives to the caller.
    assert_eq!(err.to_string(), "still down");
}

#[tokio::test]
async fn business_rejection_is_returned_not_retried() {
    let (base_url, hits) = spawn_backend().await;
    let transport = transport(&base_url, 5);

    let resp: LoginResponse = transport.get("/rejected").await.unwrap();
    assert_eq!(hits.rejected.load(Ordering::SeqCst), 1);
    assert!(resp.user.is_none());
    assert_eq!(resp.message.as_deref(), Some("Invalid employee credentials"));
}

#[tokio::test]
async fn malformed_json_counts_as_a_failed_attempt() {
    let (base_url, hits) = spawn_backend().await;
    let transport = transport(&base_url, 5);

    let result = transport.get::<MessageResponse>("/garbled").await;
    assert!(result.is_err());
    assert_eq!(hits.garbled.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn backoff_doubles_between_attempts() {
    let (base_url, _hits) = spawn_backend().await;
    // Failed attempts 0 and 1 sleep 50ms and 100ms before the retries.
    let transport = transport(&base_url, 50);

    let started = Instant::now();
    let _ = transport.get::<MessageResponse>("/broken").await;
    assert!(started.elapsed() >= Duration::from_millis(150));
}
