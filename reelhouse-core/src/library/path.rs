//! Path segment validation for inbound media requests.
//!
//! The media base directory is a trusted root; these checks make directory
//! traversal and extension-smuggling structurally impossible before any
//! filesystem access happens. Both predicates are pure and never touch I/O.

/// Video file extensions the server is willing to serve.
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "ts", "mpeg", "mpg",
];

/// Checks whether a category path segment is safe to resolve.
///
/// A category is valid iff it is non-empty, contains none of `..`, `/`, `\`,
/// and consists only of ASCII alphanumerics, underscores, and hyphens.
pub fn is_valid_category(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }

    if segment.contains("..") || segment.contains('/') || segment.contains('\\') {
        return false;
    }

    segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Checks whether a filename is safe to resolve and has a supported extension.
///
/// A filename is valid iff it is non-empty, contains none of `..`, `/`, `\`,
/// and its lowercased extension is in [`SUPPORTED_VIDEO_EXTENSIONS`].
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return false;
    }

    let Some((_, extension)) = name.rsplit_once('.') else {
        return false;
    };

    let extension = extension.to_lowercase();
    SUPPORTED_VIDEO_EXTENSIONS.contains(&extension.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_categories() {
        assert!(is_valid_category("movies"));
        assert!(is_valid_category("tv_shows"));
        assert!(is_valid_category("kids-2024"));
        assert!(is_valid_category("A"));
    }

    #[test]
    fn test_invalid_categories() {
        assert!(!is_valid_category(""));
        assert!(!is_valid_category(".."));
        assert!(!is_valid_category("movies/2024"));
        assert!(!is_valid_category("movies\\2024"));
        assert!(!is_valid_category("movies 2024"));
        assert!(!is_valid_category("movies.2024"));
        assert!(!is_valid_category("caté"));
    }

    #[test]
    fn test_valid_filenames() {
        for ext in SUPPORTED_VIDEO_EXTENSIONS {
            assert!(is_valid_filename(&format!("movie.{ext}")), "ext {ext}");
        }
        assert!(is_valid_filename("Some Movie (2024).MP4"));
        assert!(is_valid_filename("show.s01e01.mkv"));
    }

    #[test]
    fn test_invalid_filenames() {
        assert!(!is_valid_filename(""));
        assert!(!is_valid_filename("no_extension"));
        assert!(!is_valid_filename("notes.txt"));
        assert!(!is_valid_filename("archive.mp4.exe"));
        assert!(!is_valid_filename("../../etc/passwd"));
        assert!(!is_valid_filename("dir/movie.mp4"));
        assert!(!is_valid_filename("dir\\movie.mp4"));
        assert!(!is_valid_filename("..hidden.mp4"));
    }
}
