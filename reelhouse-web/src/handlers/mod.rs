//! Request handlers: streaming, JSON API, and server-rendered pages

pub mod api;
pub mod pages;
pub mod streaming;

// Re-export handlers for router construction
pub use api::{api_category_videos, api_library};
pub use pages::{index_page, player_page};
pub use streaming::{method_not_allowed, stream_video};
