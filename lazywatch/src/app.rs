//! Wiring: coordinator thread, watcher, and the proxy server.

use crate::error::{AppError, Result};

use lw_config::Config;
use lw_core::{CommandRunner, Coordinator, HttpHealthChecker, Waiter, channel};
use lw_proxy::{Backend, ProxyState, build_client, build_router};
use lw_watcher::SourceWatcher;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// How long in-flight requests get to finish once shutdown starts.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// A configured proxy with its listener already bound.
pub struct App {
    config: Config,
    listener: TcpListener,
}

impl App {
    /// Bind the proxy listener on `config.proxy_addr()`.
    pub async fn bind(config: Config) -> Result<Self> {
        let addr = config.proxy_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })?;

        Ok(Self { config, listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run until `shutdown` resolves (or the server fails), then stop the
    /// backend, release waiting requests and drain the server.
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Self { config, listener } = self;

        let client = build_client()?;
        let health = HttpHealthChecker::new(config.health_url(), client.clone(), Handle::current());
        let runner = Arc::new(CommandRunner::new(config.command.clone(), Box::new(health)));
        let coordinator = Arc::new(Coordinator::new(runner.clone()));

        let (events_tx, events_rx) = channel();
        let notifier = coordinator.notifier(events_tx);
        let _listener_thread = Arc::clone(&coordinator).spawn(events_rx)?;

        // Start the backend without waiting for the first request.
        notifier.signal();

        let invalidator = Arc::clone(&coordinator);
        let watcher = SourceWatcher::start(&config.directory, config.ignore.clone(), move || {
            invalidator.invalidate();
        })?;

        let backend = Backend::new(config.backend_host.clone(), config.ports.server);
        let waiter: Arc<dyn Waiter> = Arc::new(notifier);
        let router = build_router(ProxyState::new(client, backend.clone(), waiter));

        info!(
            "Proxying {} -> {} for `{}`",
            listener.local_addr()?,
            backend,
            config.command
        );

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let mut server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.await;
                })
                .await
        });

        let server_exited = tokio::select! {
            result = &mut server => Some(result),
            () = shutdown => None,
        };

        info!("Shutting down");
        drop(watcher);
        if let Err(e) = runner.shutdown() {
            warn!("Failed to stop backend: {e}");
        }
        let closing = Arc::clone(&coordinator);
        tokio::task::spawn_blocking(move || closing.close()).await?;

        let result = match server_exited {
            Some(result) => result,
            None => {
                let _ = stop_tx.send(());
                match tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut server).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(
                            "Requests still in flight after {}s, abandoning them",
                            SHUTDOWN_TIMEOUT.as_secs()
                        );
                        server.abort();
                        return Ok(());
                    }
                }
            }
        };

        match result? {
            Ok(()) => {
                info!("Proxy stopped");
                Ok(())
            }
            Err(e) => {
                error!("Proxy server failed: {e}");
                Err(AppError::Io(e))
            }
        }
    }
}
