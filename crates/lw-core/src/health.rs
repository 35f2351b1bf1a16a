//! Backend readiness checks.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use tokio::runtime::Handle;

const CHECK_TIMEOUT: Duration = Duration::from_secs(1);

/// Reports whether the backend is ready to serve right now.
///
/// Called every [`crate::HEALTH_POLL_INTERVAL`] while a restart is in
/// progress, so implementations must be cheap and side-effect free.
pub trait HealthChecker: Send + Sync {
    fn check(&self) -> bool;
}

impl<F> HealthChecker for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn check(&self) -> bool {
        self()
    }
}

/// Healthy iff `GET {url}` answers `200 OK`.
///
/// The check runs on the coordinator's OS thread and drives the async
/// client through a runtime handle, so `check` must not be called from
/// inside an async task.
pub struct HttpHealthChecker {
    url: String,
    client: reqwest::Client,
    runtime: Handle,
}

impl HttpHealthChecker {
    pub fn new(url: impl Into<String>, client: reqwest::Client, runtime: Handle) -> Self {
        Self {
            url: url.into(),
            client,
            runtime,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HealthChecker for HttpHealthChecker {
    fn check(&self) -> bool {
        let request = self.client.get(&self.url).timeout(CHECK_TIMEOUT).send();

        match self.runtime.block_on(request) {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                debug!("Health check {} returned HTTP {}", self.url, response.status());
                false
            }
            Err(e) => {
                debug!("Health check {} failed: {e}", self.url);
                false
            }
        }
    }
}
