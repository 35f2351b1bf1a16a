//! Proxy error types
//!
//! Every failure to reach the backend is answered with a plain-text
//! `502 Bad Gateway`. An oversized request body gets `413 Payload Too Large`.

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Backend unreachable or the exchange failed (502)
    #[error("Upstream request to {url} failed: {source} {location}")]
    Upstream {
        url: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// Inbound body could not be read (502)
    #[error("Failed to read request body: {source} {location}")]
    RequestBody {
        #[source]
        source: axum::Error,
        location: ErrorLocation,
    },

    /// Request body exceeded the configured limit (413)
    #[error("Request body exceeds {limit} bytes {location}")]
    PayloadTooLarge { limit: usize, location: ErrorLocation },

    /// The blocking readiness wait did not complete (502)
    #[error("Readiness wait failed: {source} {location}")]
    Wait {
        #[source]
        source: tokio::task::JoinError,
        location: ErrorLocation,
    },
}

impl ProxyError {
    #[track_caller]
    pub(crate) fn upstream(url: impl Into<String>, source: reqwest::Error) -> Self {
        ProxyError::Upstream {
            url: url.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn request_body(source: axum::Error) -> Self {
        ProxyError::RequestBody {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn payload_too_large(limit: usize) -> Self {
        ProxyError::PayloadTooLarge {
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn wait(source: tokio::task::JoinError) -> Self {
        ProxyError::Wait {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::PayloadTooLarge { .. } => {
                log::warn!("{}", self);
                (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large").into_response()
            }
            _ => {
                log::error!("{}", self);
                (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
