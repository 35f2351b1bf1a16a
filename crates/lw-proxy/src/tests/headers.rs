use crate::{copy_response_headers, forwardable_request_headers};

use axum::http::{HeaderMap, HeaderValue, header};
use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_request_headers_when_forwarded_then_host_removed_and_rest_kept() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3001"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
    headers.append("x-trace", HeaderValue::from_static("a"));
    headers.append("x-trace", HeaderValue::from_static("b"));

    // When
    let forwarded = forwardable_request_headers(&headers);

    // Then
    assert!(forwarded.get(header::HOST).is_none());
    assert_eq!(forwarded.get(header::ACCEPT).unwrap(), "text/html");
    assert_that!(forwarded.get_all("x-trace").iter().count(), eq(2));
}

#[test]
fn given_hop_by_hop_request_headers_when_forwarded_then_dropped() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    // When
    let forwarded = forwardable_request_headers(&headers);

    // Then
    assert_that!(forwarded.len(), eq(1));
    assert!(forwarded.contains_key(header::CONTENT_TYPE));
}

#[test]
fn given_repeated_response_header_when_copied_then_first_value_only() {
    // Given
    let mut upstream = HeaderMap::new();
    upstream.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    upstream.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    upstream.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    let mut downstream = HeaderMap::new();

    // When
    copy_response_headers(&upstream, &mut downstream);

    // Then
    let cookies: Vec<_> = downstream.get_all(header::SET_COOKIE).iter().collect();
    assert_eq!(cookies, vec!["a=1"]);
    assert_eq!(downstream.get(header::CONTENT_TYPE).unwrap(), "text/plain");
}

#[test]
fn given_transfer_encoding_when_copied_then_dropped() {
    // Given
    let mut upstream = HeaderMap::new();
    upstream.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    let mut downstream = HeaderMap::new();

    // When
    copy_response_headers(&upstream, &mut downstream);

    // Then
    assert!(downstream.is_empty());
}
