use crate::error::ProxyError;
use crate::handler::read_body;

use axum::body::Body;
use googletest::assert_that;
use googletest::prelude::contains_substring;

#[tokio::test]
async fn given_body_within_limit_when_read_then_bytes_returned() {
    // When
    let bytes = read_body(Body::from("hello"), 5).await.unwrap();

    // Then
    assert_eq!(&bytes[..], b"hello");
}

#[tokio::test]
async fn given_body_over_limit_when_read_then_payload_too_large() {
    // When
    let error = read_body(Body::from(vec![b'x'; 64]), 16).await.unwrap_err();

    // Then
    assert!(matches!(error, ProxyError::PayloadTooLarge { limit: 16, .. }));
}

#[tokio::test]
async fn given_body_over_limit_when_read_then_location_points_at_handler() {
    // When
    let error = read_body(Body::from(vec![b'x'; 64]), 16).await.unwrap_err();

    // Then
    assert_that!(error.to_string(), contains_substring("handler.rs"));
}
