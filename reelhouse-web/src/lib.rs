//! Reelhouse Web - HTTP server for browsing and streaming the media library
//!
//! Serves server-rendered pages, a JSON listing API, and the range-aware
//! video streaming endpoint.

pub mod components;
pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
