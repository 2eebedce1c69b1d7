//! Range-aware video streaming handler.
//!
//! Serves `/video/{category}/{filename}` as either a full 200 response or a
//! 206 partial response, streamed chunk by chunk. Path segments are
//! validated before any filesystem access; a response body owns its file
//! handle, so a client disconnect drops the stream and releases the
//! descriptor immediately.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, Response, StatusCode, header};
use axum::response::IntoResponse;
use reelhouse_core::library::{is_valid_category, is_valid_filename};
use reelhouse_core::streaming::{
    ByteRange, chunk_stream, content_type_for, open_file_range, parse_range_header,
};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::server::AppState;

/// Errors surfaced by the streaming endpoint before the response body has
/// started.
///
/// Once headers are committed, read failures abort the body at the
/// transport level instead; the status code cannot change at that point.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Invalid path or filename")]
    InvalidPath,

    #[error("File not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl StreamError {
    fn status(&self) -> StatusCode {
        match self {
            StreamError::InvalidPath => StatusCode::BAD_REQUEST,
            StreamError::NotFound => StatusCode::NOT_FOUND,
            StreamError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            StreamError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for StreamError {
    fn into_response(self) -> axum::response::Response {
        let body = axum::Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Streams a video file with HTTP range support.
///
/// `GET` returns the full file (200) or the requested byte range (206); a
/// malformed or out-of-bounds `Range` header degrades to full-file
/// delivery. `HEAD` returns the same headers as a 200 response without
/// opening the file.
pub async fn stream_video(
    State(state): State<AppState>,
    Path((category, filename)): Path<(String, String)>,
    method: Method,
    headers: HeaderMap,
) -> Result<Response<Body>, StreamError> {
    // Validation happens before any filesystem access
    if !is_valid_category(&category) || !is_valid_filename(&filename) {
        warn!("Rejected video request: category={category:?}, filename={filename:?}");
        return Err(StreamError::InvalidPath);
    }

    // Segments are percent-decoded exactly once by the path extractor
    let file_path = state.library.media_dir().join(&category).join(&filename);

    let metadata = match tokio::fs::metadata(&file_path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Video not found: {category}/{filename}");
            return Err(StreamError::NotFound);
        }
        Err(e) => {
            error!("Failed to stat {category}/{filename}: {e}");
            return Err(StreamError::Internal);
        }
    };

    if !metadata.is_file() {
        debug!("Not a regular file: {category}/{filename}");
        return Err(StreamError::NotFound);
    }

    let file_size = metadata.len();
    let content_type = content_type_for(&filename);

    if method == Method::HEAD {
        return head_response(&state, content_type, file_size);
    }

    let range_header = headers.get(header::RANGE).and_then(|h| h.to_str().ok());

    // An unparseable or out-of-bounds range falls back to the full file
    match parse_range_header(range_header, file_size) {
        Some(range) => {
            debug!(
                "Serving {category}/{filename} bytes {}-{}/{file_size}",
                range.start, range.end
            );
            partial_response(&state, &file_path, content_type, file_size, range).await
        }
        None => {
            debug!("Serving {category}/{filename} in full ({file_size} bytes)");
            full_response(&state, &file_path, content_type, file_size).await
        }
    }
}

/// Rejects non-GET/HEAD methods on the streaming endpoint.
pub async fn method_not_allowed() -> StreamError {
    StreamError::MethodNotAllowed
}

fn head_response(
    state: &AppState,
    content_type: &'static str,
    file_size: u64,
) -> Result<Response<Body>, StreamError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, state.config.streaming.cache_control)
        .body(Body::empty())
        .map_err(|_| StreamError::Internal)
}

async fn partial_response(
    state: &AppState,
    file_path: &std::path::Path,
    content_type: &'static str,
    file_size: u64,
    range: ByteRange,
) -> Result<Response<Body>, StreamError> {
    let file = open_file(file_path, range.start).await?;
    let stream = chunk_stream(file, range.length(), state.config.streaming.chunk_size);

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, range.length().to_string())
        .header(
            header::CONTENT_RANGE,
            format!("bytes {}-{}/{}", range.start, range.end, file_size),
        )
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, state.config.streaming.cache_control)
        .body(Body::from_stream(stream))
        .map_err(|_| StreamError::Internal)
}

async fn full_response(
    state: &AppState,
    file_path: &std::path::Path,
    content_type: &'static str,
    file_size: u64,
) -> Result<Response<Body>, StreamError> {
    let file = open_file(file_path, 0).await?;
    let stream = chunk_stream(file, file_size, state.config.streaming.chunk_size);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, state.config.streaming.cache_control)
        .body(Body::from_stream(stream))
        .map_err(|_| StreamError::Internal)
}

/// Opens the file for streaming, mapping failures to pre-commit statuses.
///
/// The file can disappear between the stat and the open; that window still
/// reports 404 rather than 500.
async fn open_file(
    file_path: &std::path::Path,
    start: u64,
) -> Result<tokio::fs::File, StreamError> {
    match open_file_range(file_path, start).await {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StreamError::NotFound),
        Err(e) => {
            error!("Failed to open {}: {e}", file_path.display());
            Err(StreamError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(StreamError::InvalidPath.status(), StatusCode::BAD_REQUEST);
        assert_eq!(StreamError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            StreamError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            StreamError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_error_bodies_do_not_leak_paths() {
        assert_eq!(StreamError::NotFound.to_string(), "File not found");
        assert_eq!(StreamError::Internal.to_string(), "Internal server error");
    }
}
