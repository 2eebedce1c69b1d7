//! Shared fixtures and helpers for driving the router in-process.

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use reelhouse_core::config::ReelhouseConfig;
use reelhouse_web::{AppState, router};
use tower::ServiceExt;

/// Builds the full application router over the given media directory.
pub fn test_app(media_dir: &Path) -> Router {
    let mut config = ReelhouseConfig::default();
    config.library.media_dir = media_dir.to_path_buf();
    router(AppState::new(config))
}

/// Sends one request through the router without binding a socket.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

/// Convenience for a body-less GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

/// Collects the response body into memory.
pub async fn body_bytes(response: Response<Body>) -> bytes::Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
}

/// Parses the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Creates a media directory with one category containing the given files.
pub fn write_video(media_dir: &Path, category: &str, filename: &str, data: &[u8]) {
    let dir = media_dir.join(category);
    std::fs::create_dir_all(&dir).expect("create category dir");
    std::fs::write(dir.join(filename), data).expect("write video file");
}

/// Deterministic test payload of the given size.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
