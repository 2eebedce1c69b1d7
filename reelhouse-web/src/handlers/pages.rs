//! Server-rendered pages: library index and video player.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use reelhouse_core::library::{is_valid_category, is_valid_filename};
use tracing::{error, warn};

use crate::components::layout;
use crate::server::AppState;

/// Errors surfaced by page handlers, rendered as HTML.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Invalid path or filename")]
    InvalidPath,

    #[error("Internal server error")]
    Internal,
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidPath => StatusCode::BAD_REQUEST,
            PageError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        let content = layout::card(Some("Something went wrong"), &self.to_string());
        (self.status(), layout::render_page("Error", &content)).into_response()
    }
}

/// `GET /` - library index with one card per category.
pub async fn index_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let categories = state.library.scan_categories().await.map_err(|e| {
        error!("Failed to scan library for index page: {e}");
        PageError::Internal
    })?;

    let category_cards: String = categories
        .iter()
        .map(|category| {
            let links: String = category
                .videos
                .iter()
                .map(|video| layout::video_link(&category.name, video))
                .collect();

            let body = if links.is_empty() {
                r#"<p class="text-gray-500">No videos yet</p>"#.to_string()
            } else {
                format!(r#"<div class="space-y-1">{links}</div>"#)
            };

            layout::card(Some(&category.label), &body)
        })
        .collect();

    let content = format!(
        "{}{}",
        layout::page_header("Library", Some("Browse your videos by category")),
        if category_cards.is_empty() {
            layout::card(None, r#"<p class="text-gray-500">The media directory has no categories yet.</p>"#)
        } else {
            category_cards
        }
    );

    Ok(layout::render_page("Library", &content))
}

/// `GET /player/{category}/{filename}` - HTML5 video player page.
pub async fn player_page(
    State(state): State<AppState>,
    Path((category, filename)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    if !is_valid_category(&category) || !is_valid_filename(&filename) {
        warn!("Rejected player request: category={category:?}, filename={filename:?}");
        return Err(PageError::InvalidPath);
    }

    let encoded = urlencoding::encode(&filename);
    let video_src = format!("/video/{category}/{encoded}");

    // Sibling videos for quick switching; listing failure degrades to an
    // empty list rather than breaking playback
    let siblings = match state.library.category_videos(&category).await {
        Ok(videos) => videos,
        Err(e) => {
            warn!("Failed to list sibling videos for {category}: {e}");
            Vec::new()
        }
    };

    let sibling_links: String = siblings
        .iter()
        .filter(|video| *video != &filename)
        .map(|video| layout::video_link(&category, video))
        .collect();

    let player = format!(
        r#"<video controls autoplay class="w-full rounded-lg bg-black">
            <source src="{video_src}">
            Your browser does not support the HTML5 video tag.
        </video>
        <h2 class="text-xl font-bold text-white mt-6">Now playing: {filename}</h2>"#
    );

    let mut content = format!("{}{}", layout::page_header(&filename, None), player);
    if !sibling_links.is_empty() {
        content.push_str(&layout::card(
            Some("More in this category"),
            &format!(r#"<div class="space-y-1">{sibling_links}</div>"#),
        ));
    }

    Ok(layout::render_page(&filename, &content))
}
