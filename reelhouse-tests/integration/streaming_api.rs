//! HTTP contract tests for the `/video/{category}/{filename}` endpoint.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;

use crate::support::{body_bytes, body_json, get, patterned_bytes, send, test_app, write_video};

#[tokio::test]
async fn test_full_file_get() {
    let temp = tempfile::tempdir().unwrap();
    let data = patterned_bytes(1000);
    write_video(temp.path(), "movies", "film.mp4", &data);

    let response = get(test_app(temp.path()), "/video/movies/film.mp4").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_LENGTH).unwrap(),
        "1000"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "video/mp4"
    );
    assert_eq!(
        response.headers().get(header::ACCEPT_RANGES).unwrap(),
        "bytes"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000, immutable"
    );
    assert!(response.headers().get(header::CONTENT_RANGE).is_none());

    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), data.as_slice());
}

#[tokio::test]
async fn test_ranged_get_first_ten_bytes() {
    let temp = tempfile::tempdir().unwrap();
    let data = patterned_bytes(100);
    write_video(temp.path(), "movies", "film.mp4", &data);

    let request = Request::builder()
        .uri("/video/movies/film.mp4")
        .header(header::RANGE, "bytes=0-9")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(temp.path()), request).await;

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        response.headers().get(header::CONTENT_RANGE).unwrap(),
        "bytes 0-9/100"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_LENGTH).unwrap(),
        "10"
    );

    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), &data[..10]);
}

#[tokio::test]
async fn test_ranged_get_open_ended() {
    let temp = tempfile::tempdir().unwrap();
    let data = patterned_bytes(1000);
    write_video(temp.path(), "movies", "film.mp4", &data);

    let request = Request::builder()
        .uri("/video/movies/film.mp4")
        .header(header::RANGE, "bytes=950-")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(temp.path()), request).await;

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        response.headers().get(header::CONTENT_RANGE).unwrap(),
        "bytes 950-999/1000"
    );

    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), &data[950..]);
}

#[tokio::test]
async fn test_ranged_get_spans_multiple_chunks() {
    let temp = tempfile::tempdir().unwrap();
    // Larger than the 64 KiB chunk size so the body arrives in several reads
    let data = patterned_bytes(200_000);
    write_video(temp.path(), "movies", "film.mp4", &data);

    let request = Request::builder()
        .uri("/video/movies/film.mp4")
        .header(header::RANGE, "bytes=1000-180999")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(temp.path()), request).await;

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    let body = body_bytes(response).await;
    assert_eq!(body.len(), 180_000);
    assert_eq!(body.as_ref(), &data[1000..181_000]);
}

#[tokio::test]
async fn test_out_of_bounds_range_degrades_to_full_file() {
    let temp = tempfile::tempdir().unwrap();
    let data = patterned_bytes(1000);
    write_video(temp.path(), "movies", "film.mp4", &data);

    for range in ["bytes=900-1000", "bytes=10-5", "bytes=-500", "bytes=0-10,20-30"] {
        let request = Request::builder()
            .uri("/video/movies/film.mp4")
            .header(header::RANGE, range)
            .body(Body::empty())
            .unwrap();
        let response = send(test_app(temp.path()), request).await;

        assert_eq!(response.status(), StatusCode::OK, "range {range:?}");
        assert_eq!(
            response.headers().get(header::CONTENT_LENGTH).unwrap(),
            "1000",
            "range {range:?}"
        );

        let body = body_bytes(response).await;
        assert_eq!(body.len(), 1000, "range {range:?}");
    }
}

#[tokio::test]
async fn test_head_returns_headers_without_body() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.webm", &patterned_bytes(512));

    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/video/movies/film.webm")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(temp.path()), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_LENGTH).unwrap(),
        "512"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "video/webm"
    );
    assert_eq!(
        response.headers().get(header::ACCEPT_RANGES).unwrap(),
        "bytes"
    );

    let body = body_bytes(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_traversal_filename_is_rejected_before_stat() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"data");

    // Encoded traversal decodes to ../../etc/passwd and must fail validation,
    // never reach the filesystem, and never report 404
    let response = get(
        test_app(temp.path()),
        "/video/movies/..%2F..%2Fetc%2Fpasswd",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid path or filename");
}

#[tokio::test]
async fn test_invalid_inputs_return_400() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"data");

    // Unsupported extension
    let response = get(test_app(temp.path()), "/video/movies/notes.txt").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Category with forbidden characters
    let response = get(test_app(temp.path()), "/video/bad..cat/film.mp4").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Backslash smuggled into the filename
    let response = get(test_app(temp.path()), "/video/movies/a%5Cb.mp4").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_file_returns_404() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"data");

    let response = get(test_app(temp.path()), "/video/movies/other.mp4").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "File not found");
}

#[tokio::test]
async fn test_directory_with_video_extension_returns_404() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"data");
    std::fs::create_dir_all(temp.path().join("movies/oops.mp4")).unwrap();

    let response = get(test_app(temp.path()), "/video/movies/oops.mp4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_get_methods_return_405() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", b"data");

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/video/movies/film.mp4")
            .body(Body::empty())
            .unwrap();
        let response = send(test_app(temp.path()), request).await;

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "method {method}"
        );
        let body = body_json(response).await;
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_percent_encoded_filename_resolves() {
    let temp = tempfile::tempdir().unwrap();
    let data = patterned_bytes(64);
    write_video(temp.path(), "movies", "my movie.mp4", &data);

    let response = get(test_app(temp.path()), "/video/movies/my%20movie.mp4").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), data.as_slice());
}

#[tokio::test]
async fn test_abandoning_response_mid_stream() {
    let temp = tempfile::tempdir().unwrap();
    write_video(temp.path(), "movies", "film.mp4", &patterned_bytes(500_000));

    let request = Request::builder()
        .uri("/video/movies/film.mp4")
        .header(header::RANGE, "bytes=0-499999")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(temp.path()), request).await;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);

    // Read a single frame, then drop the body as a disconnecting client
    // would; the file handle is owned by the stream and released with it
    let mut body = response.into_body();
    let first = body.frame().await.expect("one frame").expect("frame ok");
    assert!(!first.into_data().expect("data frame").is_empty());
    drop(body);
}
