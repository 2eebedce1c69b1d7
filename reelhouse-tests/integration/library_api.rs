//! HTTP contract tests for the JSON listing API.

use axum::http::{StatusCode, header};

use crate::support::{body_json, get, test_app, write_video};

#[tokio::test]
async fn test_library_listing_round_trips_catalog() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "zebra.mp4", b"");
    write_video(temp.path(), "movies", "alpha.mkv", b"");
    write_video(temp.path(), "clips", "clip.webm", b"");
    std::fs::write(
        temp.path().join("movies/metadata.json"),
        r#"{"name": "Feature Films"}"#,
    )
    .unwrap();

    let response = get(test_app(temp.path()), "/api/library").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = body_json(response).await;
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);

    // Sorted by directory name
    assert_eq!(categories[0]["name"], "clips");
    assert_eq!(categories[0]["label"], "clips");
    assert_eq!(categories[0]["videos"], serde_json::json!(["clip.webm"]));

    assert_eq!(categories[1]["name"], "movies");
    assert_eq!(categories[1]["label"], "Feature Films");
    assert_eq!(
        categories[1]["videos"],
        serde_json::json!(["alpha.mkv", "zebra.mp4"])
    );
}

#[tokio::test]
async fn test_category_listing_is_sorted() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "b.mp4", b"");
    write_video(temp.path(), "movies", "a.mp4", b"");
    write_video(temp.path(), "movies", "c.mov", b"");

    let response = get(test_app(temp.path()), "/api/library/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!(["a.mp4", "b.mp4", "c.mov"]));
}

#[tokio::test]
async fn test_unknown_category_returns_404() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "a.mp4", b"");

    let response = get(test_app(temp.path()), "/api/library/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn test_invalid_category_name_returns_400() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "a.mp4", b"");

    let response = get(test_app(temp.path()), "/api/library/bad..name").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid category name");
}

#[tokio::test]
async fn test_unreadable_base_directory_returns_500() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("never-created");

    let response = get(test_app(&missing), "/api/library").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}
