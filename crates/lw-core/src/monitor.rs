use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub(crate) struct MonitorState {
    /// A change was observed since the last successful restart.
    pub(crate) invalidated: bool,
    /// At least one restart has completed.
    pub(crate) started: bool,
    /// Waiters return immediately once set.
    pub(crate) closed: bool,
}

/// The lock and condition variable shared by a coordinator and its notifiers.
///
/// `generation` counts broadcasts. It only changes while `state` is locked,
/// but it can be read without the lock so a waiter can record it before
/// signalling the coordinator.
#[derive(Debug)]
pub(crate) struct Monitor {
    state: Mutex<MonitorState>,
    resolved: Condvar,
    generation: AtomicU64,
}

impl Monitor {
    pub(crate) fn new(invalidated: bool) -> Self {
        Self {
            state: Mutex::new(MonitorState {
                invalidated,
                started: false,
                closed: false,
            }),
            resolved: Condvar::new(),
            generation: AtomicU64::new(0),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Wake every waiter. Takes the guard to prove the lock is held.
    pub(crate) fn broadcast(&self, _state: &MutexGuard<'_, MonitorState>) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.resolved.notify_all();
    }

    /// Block until a broadcast newer than `observed` or the monitor closes.
    pub(crate) fn wait_past(&self, observed: u64) {
        let state = self.lock();
        let _state = self
            .resolved
            .wait_while(state, |state| {
                !state.closed && self.generation() == observed
            })
            .unwrap_or_else(PoisonError::into_inner);
    }
}
