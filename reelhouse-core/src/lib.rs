//! Reelhouse Core - Media catalog and streaming primitives
//!
//! This crate provides the fundamental building blocks for serving a local
//! video library over HTTP: configuration management, path validation,
//! byte-range parsing, chunked file streaming, and category scanning.

pub mod config;
pub mod library;
pub mod streaming;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::ReelhouseConfig;
pub use library::{Category, LibraryError, MediaLibrary, VideoLibrary};
pub use streaming::ByteRange;

/// Core errors that can bubble up from any Reelhouse subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ReelhouseError {
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {reason}")]
    Server { reason: String },
}

impl ReelhouseError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ReelhouseError::Library(e) => match e {
                LibraryError::CategoryNotFound { name } => {
                    format!("Category '{name}' not found in the media library")
                }
                LibraryError::Io(_) => "Could not read the media library".to_string(),
            },
            ReelhouseError::Configuration { reason } => {
                format!("Configuration error: {reason}")
            }
            ReelhouseError::Io(_) => "File system error occurred".to_string(),
            ReelhouseError::Server { reason } => format!("Server error: {reason}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReelhouseError>;
