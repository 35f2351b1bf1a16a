use crate::monitor::Monitor;
use crate::{EventSender, Signal};

use std::sync::Arc;

use log::warn;

/// Per-request gate: blocks until the coordinator's next resolution.
pub trait Waiter: Send + Sync {
    fn wait(&self);
}

/// Handle onto a [`crate::Coordinator`]'s monitor.
///
/// Clones share the same monitor and event channel; hand one to every
/// request.
#[derive(Clone)]
pub struct Notifier {
    monitor: Arc<Monitor>,
    events: EventSender,
}

impl Notifier {
    pub(crate) fn new(monitor: Arc<Monitor>, events: EventSender) -> Self {
        Self { monitor, events }
    }

    /// Ask the coordinator to re-evaluate without waiting for the outcome.
    pub fn signal(&self) -> bool {
        self.events.send(Signal).is_ok()
    }

    /// Signal the coordinator, then block until it broadcasts.
    ///
    /// Returns after the first broadcast that follows entry, whether it came
    /// from a restart or a no-op evaluation. Returns immediately if the
    /// coordinator has been closed or dropped.
    pub fn wait(&self) {
        let observed = self.monitor.generation();

        // Send before locking: answering the signal needs the monitor lock.
        if !self.signal() {
            warn!("Coordinator is no longer listening, not waiting for restart");
            return;
        }

        self.monitor.wait_past(observed);
    }
}

impl Waiter for Notifier {
    fn wait(&self) {
        Notifier::wait(self);
    }
}
