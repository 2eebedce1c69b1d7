//! JSON API handlers for library listings.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use reelhouse_core::library::{LibraryError, VideoLibrary, is_valid_category};
use serde_json::json;
use tracing::error;

use crate::server::AppState;

/// Errors surfaced by the listing API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid category name")]
    InvalidCategory,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCategory => StatusCode::BAD_REQUEST,
            ApiError::CategoryNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<LibraryError> for ApiError {
    fn from(e: LibraryError) -> Self {
        match e {
            LibraryError::CategoryNotFound { .. } => ApiError::CategoryNotFound,
            LibraryError::Io(e) => {
                error!("Library scan failed: {e}");
                ApiError::Internal
            }
        }
    }
}

/// `GET /api/library` - all categories with their videos and labels.
pub async fn api_library(State(state): State<AppState>) -> Result<Json<VideoLibrary>, ApiError> {
    let library = state.library.scan().await?;
    Ok(Json(library))
}

/// `GET /api/library/{category}` - sorted video filenames of one category.
pub async fn api_category_videos(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    if !is_valid_category(&category) {
        return Err(ApiError::InvalidCategory);
    }

    let videos = state.library.category_videos(&category).await?;
    Ok(Json(videos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ApiError::InvalidCategory.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::CategoryNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_library_error_conversion() {
        let not_found = LibraryError::CategoryNotFound {
            name: "missing".to_string(),
        };
        assert!(matches!(
            ApiError::from(not_found),
            ApiError::CategoryNotFound
        ));

        let io = LibraryError::Io(std::io::Error::other("disk on fire"));
        assert!(matches!(ApiError::from(io), ApiError::Internal));
    }
}
