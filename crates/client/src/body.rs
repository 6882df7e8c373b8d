//! Streaming request bodies with byte-level progress.

use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use crdrive_transfer::{FileHandle, FileSource, ProgressCallback, ProgressCounter};
use futures_util::stream::{self, Stream, TryStreamExt};
use tokio_util::io::ReaderStream;

use crate::error::ClientError;

type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// Streams the payload of `file`, reporting every chunk it yields.
async fn file_stream(
    file: &FileHandle,
    chunk_size: usize,
    progress: Option<ProgressCallback>,
) -> Result<ByteStream, ClientError> {
    let counter = Arc::new(ProgressCounter::new(file.size(), progress));
    let chunk_size = chunk_size.max(1);

    let raw: ByteStream = match file.source() {
        FileSource::Memory(data) => {
            let chunks: Vec<std::io::Result<Bytes>> = data
                .chunks(chunk_size)
                .map(|c| Ok(Bytes::copy_from_slice(c)))
                .collect();
            Box::pin(stream::iter(chunks))
        }
        FileSource::Disk(path) => {
            let f = tokio::fs::File::open(path).await?;
            Box::pin(ReaderStream::with_capacity(f, chunk_size))
        }
    };

    Ok(Box::pin(
        raw.inspect_ok(move |chunk| counter.advance(chunk.len() as u64)),
    ))
}

/// Request body for `file` with progress reporting.
pub(crate) async fn file_body(
    file: &FileHandle,
    chunk_size: usize,
    progress: Option<ProgressCallback>,
) -> Result<reqwest::Body, ClientError> {
    let stream = file_stream(file, chunk_size, progress).await?;
    Ok(reqwest::Body::wrap_stream(stream))
}
