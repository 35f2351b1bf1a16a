//! Serialized restart decisions.

use crate::monitor::Monitor;
use crate::{EventReceiver, EventSender, Notifier, RunnerError, RunnerResult, TaskRunner};

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info, warn};

const THREAD_NAME: &str = "lw-coordinator";

/// Decides when the backend must be restarted and wakes waiting requests.
///
/// Change notifications only mark the backend stale; restarts happen inside
/// [`Coordinator::handle_event`], one signal at a time, so at most one
/// restart is ever in flight. The coordinator starts out invalidated, so the
/// first signal launches the backend.
pub struct Coordinator {
    monitor: Arc<Monitor>,
    runner: Arc<dyn TaskRunner>,
}

impl Coordinator {
    pub fn new(runner: Arc<dyn TaskRunner>) -> Self {
        Self {
            monitor: Arc::new(Monitor::new(true)),
            runner,
        }
    }

    /// Record that the backend is out of date. Never restarts by itself.
    pub fn invalidate(&self) {
        let mut state = self.monitor.lock();
        debug!("Changes detected, backend invalidated");
        state.invalidated = true;
    }

    pub fn is_invalidated(&self) -> bool {
        self.monitor.lock().invalidated
    }

    /// Evaluate one signal.
    ///
    /// Restarts the backend if it was invalidated, holding the monitor lock
    /// for the whole restart, then broadcasts to every waiter. The broadcast
    /// happens even when nothing was restarted or the restart failed; a failed
    /// restart leaves the backend invalidated so the next signal retries.
    pub fn handle_event(&self) -> RunnerResult<()> {
        let mut state = self.monitor.lock();

        let result = if state.invalidated {
            info!("Restarting backend");
            let result = self.runner.start();
            if result.is_ok() {
                state.invalidated = false;
                state.started = true;
            }
            result
        } else {
            Ok(())
        };

        self.monitor.broadcast(&state);
        result
    }

    /// Process signals one at a time until every sender is dropped.
    ///
    /// Restart failures are logged and never end the loop.
    pub fn listen(&self, mut events: EventReceiver) {
        while events.blocking_recv().is_some() {
            if let Err(e) = self.handle_event() {
                self.report(&e);
            }
        }
        debug!("Event channel closed, coordinator stopped listening");
    }

    /// Run [`Coordinator::listen`] on a dedicated thread.
    pub fn spawn(self: Arc<Self>, events: EventReceiver) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || self.listen(events))
    }

    /// Create a request gate sharing this coordinator's monitor.
    pub fn notifier(&self, events: EventSender) -> Notifier {
        Notifier::new(Arc::clone(&self.monitor), events)
    }

    /// Release every waiter now and in the future.
    ///
    /// Blocks until any restart in progress has finished.
    pub fn close(&self) {
        let mut state = self.monitor.lock();
        state.closed = true;
        self.monitor.broadcast(&state);
        info!("Coordinator closed, releasing waiting requests");
    }

    fn report(&self, e: &RunnerError) {
        if !e.is_retryable() {
            debug!("Restart abandoned: {e}");
        } else if !self.monitor.lock().started {
            error!(
                "Backend has never started successfully: {e}. \
                 Proxied requests will fail until a later restart succeeds."
            );
        } else {
            warn!("Restart failed, will retry on the next request: {e}");
        }
    }
}
