use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use std::io;
use std::sync::Arc;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Transport progress callback: `(bytes_loaded, bytes_total)`.
pub type ProgressFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Integer percentage of `loaded` over `total`, rounded and capped at 100.
/// An empty transfer (`total == 0`) reports 0.
pub fn percent(loaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (loaded as u128 * 100 + total as u128 / 2) / total as u128;
    scaled.min(100) as u8
}

/// Passes `inner` through unchanged, calling `on_progress` with the
/// cumulative byte count each time the consumer pulls a chunk.
pub fn track_progress<S>(
    inner: S,
    total: u64,
    on_progress: ProgressFn,
) -> impl Stream<Item = io::Result<Bytes>> + Send + Sync + 'static
where
    S: Stream<Item = io::Result<Bytes>> + Send + Sync + 'static,
{
    let mut loaded = 0u64;
    inner.map(move |chunk| {
        if let Ok(bytes) = &chunk {
            loaded += bytes.len() as u64;
            on_progress(loaded, total);
        }
        chunk
    })
}

/// Reads `file` in chunks of roughly `chunk_size` bytes, reporting progress
/// against `total`.
pub fn file_stream(
    file: File,
    total: u64,
    chunk_size: usize,
    on_progress: ProgressFn,
) -> impl Stream<Item = io::Result<Bytes>> + Send + Sync + 'static {
    track_progress(
        ReaderStream::with_capacity(file, chunk_size.max(1)),
        total,
        on_progress,
    )
}
