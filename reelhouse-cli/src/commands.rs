//! CLI command implementations

use std::path::PathBuf;

use clap::Subcommand;
use reelhouse_core::config::ReelhouseConfig;
use reelhouse_core::library::MediaLibrary;
use reelhouse_core::{ReelhouseError, Result};
use reelhouse_web::run_server;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Media base directory (overrides REELHOUSE_MEDIA_DIR)
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },
    /// Scan the media library and print a summary
    Scan {
        /// Media base directory (overrides REELHOUSE_MEDIA_DIR)
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            media_dir,
        } => serve(host, port, media_dir).await,
        Commands::Scan { media_dir } => scan(media_dir).await,
    }
}

/// Resolve configuration from the environment plus CLI overrides.
///
/// # Errors
/// - `ReelhouseError::Configuration` - Media directory does not exist
fn build_config(media_dir: Option<PathBuf>) -> Result<ReelhouseConfig> {
    let mut config = ReelhouseConfig::from_env();
    if let Some(dir) = media_dir {
        config.library.media_dir = dir;
    }

    if !config.library.media_dir.is_dir() {
        return Err(ReelhouseError::Configuration {
            reason: format!(
                "media directory does not exist: {}",
                config.library.media_dir.display()
            ),
        });
    }

    Ok(config)
}

/// Start the web server
///
/// # Errors
/// - `ReelhouseError::Configuration` - Invalid media directory or bind address
/// - `ReelhouseError::Server` - Server failed to bind or crashed
async fn serve(host: String, port: u16, media_dir: Option<PathBuf>) -> Result<()> {
    let mut config = build_config(media_dir)?;

    config.server.bind_address =
        format!("{host}:{port}")
            .parse()
            .map_err(|e| ReelhouseError::Configuration {
                reason: format!("invalid bind address {host}:{port}: {e}"),
            })?;

    println!("Starting Reelhouse web server...");
    println!("Library: {}", config.library.media_dir.display());
    println!("URL: http://{}", config.server.bind_address);
    println!("{:-<50}", "");
    println!("Press Ctrl+C to stop the server");

    run_server(config).await.map_err(|e| ReelhouseError::Server {
        reason: e.to_string(),
    })
}

/// Scan the media library and print category and video counts
///
/// # Errors
/// - `ReelhouseError::Configuration` - Media directory does not exist
/// - `ReelhouseError::Library` - Directory enumeration failed
async fn scan(media_dir: Option<PathBuf>) -> Result<()> {
    let config = build_config(media_dir)?;
    let library = MediaLibrary::new(config.library.media_dir.clone());

    let categories = library.scan_categories().await?;

    println!("Media library: {}", config.library.media_dir.display());
    println!("{:-<60}", "");

    if categories.is_empty() {
        println!("No categories found.");
        println!("Create one subdirectory per category under the media directory.");
        return Ok(());
    }

    let mut total = 0usize;
    for category in &categories {
        println!(
            "{:<30} {:>5} videos  ({})",
            category.name,
            category.videos.len(),
            category.label
        );
        total += category.videos.len();
    }

    println!("{:-<60}", "");
    println!("{} categories, {} videos", categories.len(), total);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_with_existing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let config = build_config(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.library.media_dir, temp.path());
    }

    #[test]
    fn test_build_config_rejects_missing_directory() {
        let result = build_config(Some(PathBuf::from("/definitely/not/a/real/dir")));
        assert!(matches!(
            result,
            Err(ReelhouseError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn test_scan_reports_empty_library() {
        let temp = tempfile::tempdir().unwrap();
        let result = scan(Some(temp.path().to_path_buf())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_scan_counts_categories() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("movies")).unwrap();
        std::fs::write(temp.path().join("movies/a.mp4"), b"").unwrap();

        let result = scan(Some(temp.path().to_path_buf())).await;
        assert!(result.is_ok());
    }
}
