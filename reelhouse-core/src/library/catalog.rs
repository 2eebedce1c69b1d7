//! Category catalog for the media base directory.
//!
//! Each immediate subdirectory of the base directory is one category. A
//! category may carry an optional JSON descriptor (any `*.json` file in the
//! directory) whose `name` field supplies the display label; the directory
//! name is used otherwise.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::path::SUPPORTED_VIDEO_EXTENSIONS;

/// Errors from media library enumeration.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Category not found: {name}")]
    CategoryNotFound { name: String },
}

/// One category of videos with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub label: String,
    pub videos: Vec<String>,
}

/// Full library listing, the `/api/library` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLibrary {
    pub categories: Vec<Category>,
}

/// Optional descriptor co-located with a category's video files.
#[derive(Debug, Deserialize)]
struct CategoryDescriptor {
    name: String,
}

/// Read-only view over the configured media base directory.
///
/// The base directory is injected once at startup and never changes for the
/// lifetime of the server.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    media_dir: PathBuf,
}

impl MediaLibrary {
    /// Create a library over the given base directory.
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
        }
    }

    /// The configured base directory.
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Enumerates all categories with their videos and display labels.
    ///
    /// Categories and the videos within each are sorted by name. Entries
    /// that are not directories are skipped.
    ///
    /// # Errors
    /// - `LibraryError::Io` - Base directory cannot be read
    pub async fn scan_categories(&self) -> Result<Vec<Category>, LibraryError> {
        let mut categories = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.media_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let (videos, label) = self.scan_category_dir(&path).await?;
            categories.push(Category {
                name: name.to_string(),
                label: label.unwrap_or_else(|| name.to_string()),
                videos,
            });
        }

        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Enumerates the full library as a single payload.
    ///
    /// # Errors
    /// - `LibraryError::Io` - Base directory cannot be read
    pub async fn scan(&self) -> Result<VideoLibrary, LibraryError> {
        Ok(VideoLibrary {
            categories: self.scan_categories().await?,
        })
    }

    /// Lists the video filenames of a single category, sorted by name.
    ///
    /// # Errors
    /// - `LibraryError::CategoryNotFound` - Category directory does not exist
    /// - `LibraryError::Io` - Directory cannot be read
    pub async fn category_videos(&self, category: &str) -> Result<Vec<String>, LibraryError> {
        let dir = self.media_dir.join(category);
        match self.scan_category_dir(&dir).await {
            Ok((videos, _)) => Ok(videos),
            Err(LibraryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LibraryError::CategoryNotFound {
                    name: category.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Collects video filenames and the optional descriptor label of one
    /// category directory.
    async fn scan_category_dir(
        &self,
        dir: &Path,
    ) -> Result<(Vec<String>, Option<String>), LibraryError> {
        let mut videos = Vec::new();
        let mut descriptors = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            let extension = extension.to_lowercase();

            if SUPPORTED_VIDEO_EXTENSIONS.contains(&extension.as_str()) {
                videos.push(name.to_string());
            } else if extension == "json" {
                descriptors.push(path.clone());
            }
        }

        videos.sort();
        descriptors.sort();

        let label = match descriptors.first() {
            Some(descriptor_path) => self.read_descriptor_label(descriptor_path).await,
            None => None,
        };

        Ok((videos, label))
    }

    /// Reads the display label from a category descriptor file.
    ///
    /// A missing or malformed descriptor is not fatal; the caller falls back
    /// to the directory name.
    async fn read_descriptor_label(&self, path: &Path) -> Option<String> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read category descriptor {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_str::<CategoryDescriptor>(&contents) {
            Ok(descriptor) => Some(descriptor.name),
            Err(e) => {
                warn!(
                    "Malformed category descriptor {}: {e}",
                    path.display()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_library() -> (tempfile::TempDir, MediaLibrary) {
        let temp = tempfile::tempdir().unwrap();
        let library = MediaLibrary::new(temp.path());
        (temp, library)
    }

    fn create_category(base: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = base.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for (filename, contents) in files {
            std::fs::write(dir.join(filename), contents).unwrap();
        }
    }

    #[tokio::test]
    async fn test_scan_categories_sorted_with_labels() {
        let (temp, library) = create_library();

        create_category(
            temp.path(),
            "movies",
            &[
                ("zebra.mp4", ""),
                ("alpha.mkv", ""),
                ("metadata.json", r#"{"name": "Feature Films"}"#),
                ("cover.png", ""),
            ],
        );
        create_category(temp.path(), "clips", &[("clip1.webm", "")]);

        let categories = library.scan_categories().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "clips");
        assert_eq!(categories[0].label, "clips");
        assert_eq!(categories[0].videos, vec!["clip1.webm"]);

        assert_eq!(categories[1].name, "movies");
        assert_eq!(categories[1].label, "Feature Films");
        assert_eq!(categories[1].videos, vec!["alpha.mkv", "zebra.mp4"]);
    }

    #[tokio::test]
    async fn test_descriptor_and_non_video_files_excluded() {
        let (temp, library) = create_library();

        create_category(
            temp.path(),
            "mixed",
            &[
                ("movie.mp4", ""),
                ("metadata.json", r#"{"name": "Mixed"}"#),
                ("notes.txt", ""),
                ("subtitle.srt", ""),
            ],
        );

        let videos = library.category_videos("mixed").await.unwrap();
        assert_eq!(videos, vec!["movie.mp4"]);
    }

    #[tokio::test]
    async fn test_malformed_descriptor_falls_back_to_directory_name() {
        let (temp, library) = create_library();

        create_category(
            temp.path(),
            "broken",
            &[("movie.mp4", ""), ("metadata.json", "not json at all")],
        );

        let categories = library.scan_categories().await.unwrap();
        assert_eq!(categories[0].label, "broken");
    }

    #[tokio::test]
    async fn test_missing_category_is_not_found() {
        let (_temp, library) = create_library();

        let result = library.category_videos("nonexistent").await;
        assert!(matches!(
            result,
            Err(LibraryError::CategoryNotFound { name }) if name == "nonexistent"
        ));
    }

    #[tokio::test]
    async fn test_uppercase_extensions_match() {
        let (temp, library) = create_library();

        create_category(temp.path(), "caps", &[("MOVIE.MP4", "")]);

        let videos = library.category_videos("caps").await.unwrap();
        assert_eq!(videos, vec!["MOVIE.MP4"]);
    }
}
