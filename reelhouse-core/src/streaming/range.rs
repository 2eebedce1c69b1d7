//! HTTP `Range` header parsing for single byte ranges.

/// An inclusive byte range within a file, `0 <= start <= end < file_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the range.
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Parses an HTTP `Range` header into a byte range validated against the
/// actual file size.
///
/// Supports the single-range form `bytes=<start>-<end>?`; `start` is
/// mandatory, an omitted `end` means "to end of file". Returns `None` (serve
/// the full file) when the header is absent, does not match that form,
/// `start > end`, or `end >= file_size` (out-of-bounds ranges are rejected,
/// never clamped). Suffix ranges (`bytes=-500`) and multi-range headers are
/// not supported and also yield `None`.
///
/// Pure function: no I/O, deterministic given its inputs.
pub fn parse_range_header(header: Option<&str>, file_size: u64) -> Option<ByteRange> {
    let header = header?.strip_prefix("bytes=")?;
    let (start_str, end_str) = header.split_once('-')?;

    if start_str.is_empty() {
        return None;
    }

    let start = start_str.parse::<u64>().ok()?;
    let end = if end_str.is_empty() {
        file_size.checked_sub(1)?
    } else {
        end_str.parse::<u64>().ok()?
    };

    if start > end || end >= file_size {
        return None;
    }

    Some(ByteRange { start, end })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_absent_header() {
        assert_eq!(parse_range_header(None, 1000), None);
    }

    #[test]
    fn test_bounded_range() {
        assert_eq!(
            parse_range_header(Some("bytes=0-99"), 1000),
            Some(ByteRange { start: 0, end: 99 })
        );
        assert_eq!(
            parse_range_header(Some("bytes=500-999"), 1000),
            Some(ByteRange {
                start: 500,
                end: 999
            })
        );
    }

    #[test]
    fn test_open_ended_range() {
        assert_eq!(
            parse_range_header(Some("bytes=500-"), 1000),
            Some(ByteRange {
                start: 500,
                end: 999
            })
        );
    }

    #[test]
    fn test_out_of_bounds_end_rejected_not_clamped() {
        assert_eq!(parse_range_header(Some("bytes=900-1000"), 1000), None);
        assert_eq!(parse_range_header(Some("bytes=0-1000"), 1000), None);
    }

    #[test]
    fn test_start_after_end_rejected() {
        assert_eq!(parse_range_header(Some("bytes=10-5"), 1000), None);
    }

    #[test]
    fn test_start_beyond_file_rejected() {
        assert_eq!(parse_range_header(Some("bytes=1500-"), 1000), None);
    }

    #[test]
    fn test_unsupported_forms() {
        // Suffix ranges are not supported
        assert_eq!(parse_range_header(Some("bytes=-500"), 1000), None);
        // Multi-range headers fall back to full-file delivery
        assert_eq!(parse_range_header(Some("bytes=0-10,20-30"), 1000), None);
        // Other units and garbage
        assert_eq!(parse_range_header(Some("items=0-10"), 1000), None);
        assert_eq!(parse_range_header(Some("bytes=abc-def"), 1000), None);
        assert_eq!(parse_range_header(Some("bytes=-"), 1000), None);
        assert_eq!(parse_range_header(Some("garbage"), 1000), None);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(parse_range_header(Some("bytes=0-"), 0), None);
        assert_eq!(parse_range_header(Some("bytes=0-0"), 0), None);
    }

    #[test]
    fn test_single_byte_range() {
        let range = parse_range_header(Some("bytes=0-0"), 1).unwrap();
        assert_eq!(range.length(), 1);
    }

    proptest! {
        #[test]
        fn parsed_range_is_always_within_file(
            start in 0u64..10_000,
            end in 0u64..10_000,
            file_size in 0u64..10_000,
        ) {
            let header = format!("bytes={start}-{end}");
            if let Some(range) = parse_range_header(Some(&header), file_size) {
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end < file_size);
                prop_assert_eq!(range.start, start);
                prop_assert_eq!(range.end, end);
            } else {
                prop_assert!(start > end || end >= file_size);
            }
        }

        #[test]
        fn open_ended_range_always_reaches_last_byte(
            start in 0u64..10_000,
            file_size in 1u64..10_000,
        ) {
            let header = format!("bytes={start}-");
            if let Some(range) = parse_range_header(Some(&header), file_size) {
                prop_assert_eq!(range.start, start);
                prop_assert_eq!(range.end, file_size - 1);
            } else {
                prop_assert!(start >= file_size);
            }
        }
    }
}
