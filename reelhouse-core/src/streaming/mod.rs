//! Streaming primitives: range parsing, content types, chunked file reads

pub mod file_stream;
pub mod media_type;
pub mod range;

pub use file_stream::{chunk_stream, open_file_range};
pub use media_type::content_type_for;
pub use range::{ByteRange, parse_range_header};
