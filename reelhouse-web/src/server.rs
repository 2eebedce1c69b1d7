//! Axum web server wiring for Reelhouse
//!
//! Builds the router over an immutable application state and runs the
//! server. The state is constructed once at startup; nothing reads the
//! environment per request.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use reelhouse_core::config::ReelhouseConfig;
use reelhouse_core::library::MediaLibrary;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_category_videos, api_library, index_page, method_not_allowed, player_page, stream_video,
};

/// Shared state for all request handlers.
///
/// Both fields are immutable after startup; per-request tasks share no
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<MediaLibrary>,
    pub config: Arc<ReelhouseConfig>,
}

impl AppState {
    /// Builds the application state from a resolved configuration.
    pub fn new(config: ReelhouseConfig) -> Self {
        let library = Arc::new(MediaLibrary::new(config.library.media_dir.clone()));
        Self {
            library,
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
///
/// Exposed separately from [`run_server`] so tests can drive the app
/// in-process without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(index_page))
        .route("/player/{category}/{filename}", get(player_page))
        // Streaming endpoint; GET also serves HEAD, anything else is 405
        .route(
            "/video/{category}/{filename}",
            get(stream_video).fallback(method_not_allowed),
        )
        // JSON API endpoints
        .route("/api/library", get(api_library))
        .route("/api/library/{category}", get(api_category_videos))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until shutdown.
///
/// # Errors
/// - `Box<dyn std::error::Error>` - Failed to bind the configured address
pub async fn run_server(config: ReelhouseConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = config.server.bind_address;
    let app = router(AppState::new(config));

    println!("Reelhouse media server running on http://{bind_address}");
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
