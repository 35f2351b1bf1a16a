use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};

/// Largest piece written to the client at once.
pub const CHUNK_SIZE: usize = 32 * 1024;

/// Default cap on an inbound request body.
pub const MAX_REQUEST_BODY: usize = 64 * 1024 * 1024;

/// Re-split a stream of byte chunks into pieces of at most `max` bytes.
///
/// The first error ends the stream after being yielded.
pub fn split_chunks<S, E>(chunks: S, max: usize) -> impl Stream<Item = Result<Bytes, E>>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
{
    let max = max.max(1);
    stream::unfold(
        (Some(chunks), Bytes::new()),
        move |(mut chunks, mut pending)| async move {
            loop {
                if !pending.is_empty() {
                    let piece = pending.split_to(pending.len().min(max));
                    return Some((Ok(piece), (chunks, pending)));
                }

                match chunks.as_mut()?.next().await {
                    Some(Ok(chunk)) => pending = chunk,
                    Some(Err(e)) => return Some((Err(e), (None, Bytes::new()))),
                    None => return None,
                }
            }
        },
    )
}
