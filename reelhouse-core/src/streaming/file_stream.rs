//! Bounded chunked reads over an open file.
//!
//! A streaming response owns exactly one reader for its lifetime. The chunk
//! stream yields bytes in file order, one buffered chunk at a time, and ends
//! after the requested length, on error, or when the response body is
//! dropped (client disconnect); dropping the stream drops the reader and
//! releases the file descriptor.

use std::io::SeekFrom;
use std::path::Path;

use bytes::Bytes;
use futures::{Stream, stream};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt};

/// Opens a file positioned at `start`, ready for bounded streaming.
///
/// # Errors
/// - `std::io::Error` - File cannot be opened or seeked
pub async fn open_file_range(path: &Path, start: u64) -> std::io::Result<File> {
    let mut file = File::open(path).await?;
    if start > 0 {
        file.seek(SeekFrom::Start(start)).await?;
    }
    Ok(file)
}

/// Streams exactly `length` bytes from the reader in chunks of at most
/// `chunk_size` bytes.
///
/// Chunks are yielded in read order with no reordering or duplication, and
/// never more than one chunk is buffered. If the reader ends before `length`
/// bytes are delivered, a single `UnexpectedEof` error item is yielded; any
/// other read error is likewise yielded once. The stream is terminal after
/// an error item.
pub fn chunk_stream<R>(
    reader: R,
    length: u64,
    chunk_size: usize,
) -> impl Stream<Item = std::io::Result<Bytes>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    stream::unfold(
        (reader, 0u64),
        move |(mut reader, delivered)| async move {
            if delivered >= length {
                return None;
            }

            let remaining = length - delivered;
            let read_size = remaining.min(chunk_size as u64) as usize;
            let mut buffer = vec![0u8; read_size];

            match reader.read(&mut buffer).await {
                Ok(0) => Some((
                    Err(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "file ended before the requested range was delivered",
                    )),
                    (reader, length),
                )),
                Ok(n) => {
                    buffer.truncate(n);
                    Some((Ok(Bytes::from(buffer)), (reader, delivered + n as u64)))
                }
                Err(e) => Some((Err(e), (reader, length))),
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use futures::StreamExt;

    use super::*;

    /// Reader that records when it is dropped, standing in for an open file
    /// descriptor in cancellation tests.
    struct TrackedReader {
        inner: Cursor<Vec<u8>>,
        dropped: Arc<AtomicBool>,
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    impl AsyncRead for TrackedReader {
        fn poll_read(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
            buf: &mut tokio::io::ReadBuf<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::pin::Pin::new(&mut self.inner).poll_read(cx, buf)
        }
    }

    #[tokio::test]
    async fn test_yields_exact_bytes_in_order() {
        let data: Vec<u8> = (0..=255).collect();
        let stream = chunk_stream(Cursor::new(data.clone()), 100, 33);

        let chunks: Vec<_> = stream.collect().await;
        assert_eq!(chunks.len(), 4); // 33 + 33 + 33 + 1

        let mut collected = Vec::new();
        for chunk in chunks {
            collected.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(collected, data[..100]);
    }

    #[tokio::test]
    async fn test_zero_length_stream_is_empty() {
        let stream = chunk_stream(Cursor::new(vec![1u8, 2, 3]), 0, 64);
        let chunks: Vec<_> = stream.collect().await;
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_premature_eof_yields_error_then_ends() {
        let stream = chunk_stream(Cursor::new(vec![7u8; 10]), 20, 64);
        let chunks: Vec<_> = stream.collect().await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].as_ref().unwrap().len(), 10);

        let err = chunks[1].as_ref().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn test_dropping_stream_releases_reader() {
        let dropped = Arc::new(AtomicBool::new(false));
        let reader = TrackedReader {
            inner: Cursor::new(vec![0u8; 1024]),
            dropped: dropped.clone(),
        };

        let mut stream = Box::pin(chunk_stream(reader, 1024, 64));

        // Consume part of the stream, then abandon it mid-flight
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.len(), 64);
        assert!(!dropped.load(Ordering::SeqCst));

        drop(stream);
        assert!(dropped.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_open_file_range_seeks_to_start() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let data: Vec<u8> = (0..100).collect();
        std::fs::write(temp.path(), &data).unwrap();

        let file = open_file_range(temp.path(), 40).await.unwrap();
        let stream = chunk_stream(file, 60, 16);

        let chunks: Vec<_> = stream.collect().await;
        let mut collected = Vec::new();
        for chunk in chunks {
            collected.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(collected, data[40..]);
    }
}
