use crate::{CHUNK_SIZE, split_chunks};

use std::convert::Infallible;

use bytes::Bytes;
use futures::StreamExt;
use futures::executor::block_on;
use futures::stream;

fn collect_sizes(chunks: Vec<Bytes>, max: usize) -> Vec<usize> {
    let source = stream::iter(chunks.into_iter().map(Ok::<_, Infallible>));
    block_on(
        split_chunks(source, max)
            .map(|piece| piece.unwrap().len())
            .collect(),
    )
}

#[test]
fn given_large_chunk_when_split_then_pieces_never_exceed_limit() {
    // Given
    let big = Bytes::from(vec![7u8; CHUNK_SIZE * 2 + 10]);

    // When
    let sizes = collect_sizes(vec![big], CHUNK_SIZE);

    // Then
    assert_eq!(sizes, vec![CHUNK_SIZE, CHUNK_SIZE, 10]);
}

#[test]
fn given_small_chunks_when_split_then_passed_through() {
    // When
    let sizes = collect_sizes(
        vec![Bytes::from_static(b"Ro"), Bytes::from_static(b"ot")],
        CHUNK_SIZE,
    );

    // Then
    assert_eq!(sizes, vec![2, 2]);
}

#[test]
fn given_empty_chunks_when_split_then_skipped() {
    // When
    let sizes = collect_sizes(vec![Bytes::new(), Bytes::from_static(b"x")], 4);

    // Then
    assert_eq!(sizes, vec![1]);
}

#[test]
fn given_error_mid_stream_when_split_then_stream_ends_after_error() {
    // Given
    let source = stream::iter(vec![
        Ok(Bytes::from_static(b"abc")),
        Err("reset"),
        Ok(Bytes::from_static(b"never")),
    ]);

    // When
    let items: Vec<Result<Bytes, &str>> = block_on(split_chunks(source, 2).collect());

    // Then
    assert_eq!(
        items,
        vec![
            Ok(Bytes::from_static(b"ab")),
            Ok(Bytes::from_static(b"c")),
            Err("reset"),
        ]
    );
}
