//! Reverse proxy that holds each request until the backend is up to date,
//! then forwards it verbatim.

mod body;
mod client;
mod error;
mod handler;
mod headers;
mod router;
mod state;

#[cfg(test)]
mod tests;

pub use body::{CHUNK_SIZE, MAX_REQUEST_BODY, split_chunks};
pub use client::build_client;
pub use error::{ProxyError, Result as ProxyResult};
pub use handler::proxy_request;
pub use headers::{copy_response_headers, forwardable_request_headers};
pub use router::build_router;
pub use state::{Backend, ProxyState};
