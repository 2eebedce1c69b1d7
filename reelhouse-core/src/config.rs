//! Centralized configuration for Reelhouse.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Central configuration for all Reelhouse components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct ReelhouseConfig {
    pub library: LibraryConfig,
    pub streaming: StreamingConfig,
    pub server: ServerConfig,
}

/// Media library location configuration.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Base directory containing one subdirectory per category
    pub media_dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            // Placeholder only; overridden via REELHOUSE_MEDIA_DIR
            media_dir: PathBuf::from("/path/to/your/media"),
        }
    }
}

/// Streaming response configuration.
///
/// Controls chunked read behavior and client-side caching for
/// streamed video bodies.
#[derive(Debug, Clone)]
pub struct StreamingConfig {
    /// Read buffer size for streamed file chunks
    pub chunk_size: usize,
    /// Cache-Control header applied to successful video responses
    pub cache_control: &'static str,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 65536, // 64 KiB
            cache_control: "public, max-age=31536000, immutable",
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the web server binds to
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl ReelhouseConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("REELHOUSE_MEDIA_DIR") {
            if !dir.is_empty() {
                config.library.media_dir = PathBuf::from(dir);
            }
        }

        if let Ok(chunk_size) = std::env::var("REELHOUSE_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse::<usize>() {
                if size > 0 {
                    config.streaming.chunk_size = size;
                }
            }
        }

        if let Ok(addr) = std::env::var("REELHOUSE_BIND_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.server.bind_address = parsed;
            }
        }

        config
    }
}
