//! Media library: path validation and category scanning

pub mod catalog;
pub mod path;

pub use catalog::{Category, LibraryError, MediaLibrary, VideoLibrary};
pub use path::{SUPPORTED_VIDEO_EXTENSIONS, is_valid_category, is_valid_filename};
