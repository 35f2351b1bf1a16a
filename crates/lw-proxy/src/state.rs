use crate::body::MAX_REQUEST_BODY;

use lw_core::Waiter;

use std::fmt;
use std::sync::Arc;

/// Where proxied requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    pub host: String,
    pub port: u16,
}

impl Backend {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Absolute backend URL for a raw path-and-query such as `/a?b=c`.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path_and_query)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Shared state for the proxy handler
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub backend: Backend,
    /// Blocks until the backend reflects the latest change.
    pub waiter: Arc<dyn Waiter>,
    /// Largest request body forwarded, in bytes.
    pub body_limit: usize,
}

impl ProxyState {
    pub fn new(client: reqwest::Client, backend: Backend, waiter: Arc<dyn Waiter>) -> Self {
        Self {
            client,
            backend,
            waiter,
            body_limit: MAX_REQUEST_BODY,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}
