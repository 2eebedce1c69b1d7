//! Content-type resolution for video filenames.

/// Determines the MIME type for a filename from its extension.
///
/// Unknown extensions default to `video/mp4`, matching what browsers expect
/// from a video endpoint.
pub fn content_type_for(filename: &str) -> &'static str {
    mime_guess::from_path(filename)
        .first_raw()
        .unwrap_or("video/mp4")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_video_types() {
        assert_eq!(content_type_for("movie.mp4"), "video/mp4");
        assert_eq!(content_type_for("movie.webm"), "video/webm");
        assert_eq!(content_type_for("movie.mkv"), "video/x-matroska");
        assert_eq!(content_type_for("movie.avi"), "video/x-msvideo");
    }

    #[test]
    fn test_case_insensitive_extension() {
        assert_eq!(content_type_for("MOVIE.MP4"), "video/mp4");
    }

    #[test]
    fn test_unknown_extension_defaults_to_mp4() {
        assert_eq!(content_type_for("movie.unknownext"), "video/mp4");
        assert_eq!(content_type_for("no_extension"), "video/mp4");
    }
}
