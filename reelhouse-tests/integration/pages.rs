//! Rendered-page tests for the library index and the player.

use axum::http::{StatusCode, header};

use crate::support::{body_bytes, get, test_app, write_video};

async fn body_string(response: axum::http::Response<axum::body::Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_lists_categories_and_videos() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "my movie.mp4", b"");
    std::fs::write(
        temp.path().join("movies/metadata.json"),
        r#"{"name": "Feature Films"}"#,
    )
    .unwrap();

    let response = get(test_app(temp.path()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = body_string(response).await;
    assert!(html.contains("Feature Films"));
    // Filenames are percent-encoded in generated links
    assert!(html.contains("/player/movies/my%20movie.mp4"));
}

#[tokio::test]
async fn test_index_with_empty_library() {
    let temp = tempfile::tempdir().unwrap();

    let response = get(test_app(temp.path()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("no categories"));
}

#[tokio::test]
async fn test_player_page_embeds_streaming_source() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"");
    write_video(temp.path(), "movies", "other.mp4", b"");

    let response = get(test_app(temp.path()), "/player/movies/film.mp4").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<video"));
    assert!(html.contains(r#"src="/video/movies/film.mp4""#));
    // Sibling videos are listed, the current one is not repeated
    assert!(html.contains("/player/movies/other.mp4"));
    assert!(!html.contains(r#"href="/player/movies/film.mp4""#));
}

#[tokio::test]
async fn test_player_page_rejects_invalid_input() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"");

    let response = get(
        test_app(temp.path()),
        "/player/movies/..%2F..%2Fetc%2Fpasswd",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
