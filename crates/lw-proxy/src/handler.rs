use crate::body::{CHUNK_SIZE, split_chunks};
use crate::error::{ProxyError, Result};
use crate::headers::{copy_response_headers, forwardable_request_headers};
use crate::state::ProxyState;

use std::error::Error as _;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    response::Response,
};
use bytes::Bytes;
use futures::{TryStreamExt, stream};
use http_body_util::LengthLimitError;
use log::{debug, error};

/// Forward any request to the backend once it is up to date.
///
/// The readiness wait blocks an OS thread, so it runs on tokio's blocking pool.
pub async fn proxy_request(State(state): State<ProxyState>, request: Request) -> Result<Response> {
    let started = Instant::now();
    let waiter = Arc::clone(&state.waiter);
    // Closures rather than fn paths so `#[track_caller]` records this file.
    tokio::task::spawn_blocking(move || waiter.wait())
        .await
        .map_err(|e| ProxyError::wait(e))?;

    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = state.backend.url(path_and_query);

    let body = read_body(body, state.body_limit).await?;

    let upstream = state
        .client
        .request(parts.method.clone(), url.as_str())
        .headers(forwardable_request_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::upstream(&url, e))?;

    debug!(
        "{} {} -> {} in {}ms",
        parts.method,
        path_and_query,
        upstream.status(),
        started.elapsed().as_millis()
    );

    let mut response = Response::new(Body::empty());
    *response.status_mut() = upstream.status();
    copy_response_headers(upstream.headers(), response.headers_mut());

    *response.body_mut() = Body::from_stream(
        split_chunks(Box::pin(upstream_chunks(upstream)), CHUNK_SIZE)
            .inspect_err(move |e| error!("Response body from {url} aborted: {e}")),
    );

    Ok(response)
}

/// Buffer the inbound body, refusing anything over `limit` bytes.
pub(crate) async fn read_body(body: Body, limit: usize) -> Result<Bytes> {
    to_bytes(body, limit).await.map_err(|e| {
        if e.source().is_some_and(|s| s.is::<LengthLimitError>()) {
            ProxyError::payload_too_large(limit)
        } else {
            ProxyError::request_body(e)
        }
    })
}

/// The backend's response body as a stream of chunks as they arrive.
fn upstream_chunks(
    response: reqwest::Response,
) -> impl futures::Stream<Item = std::result::Result<bytes::Bytes, reqwest::Error>> {
    stream::unfold(Some(response), |response| async move {
        let mut response = response?;
        match response.chunk().await {
            Ok(Some(chunk)) => Some((Ok(chunk), Some(response))),
            Ok(None) => None,
            Err(e) => Some((Err(e), None)),
        }
    })
}
