//! Integration tests for Reelhouse
//!
//! These tests drive the full router in-process and verify the HTTP
//! contract of the streaming endpoint, the listing API, and the rendered
//! pages.

#[path = "integration/support.rs"]
mod support;

#[path = "integration/streaming_api.rs"]
mod streaming_api;

#[path = "integration/library_api.rs"]
mod library_api;

#[path = "integration/pages.rs"]
mod pages;
