mod command;

use crate::{Notifier, RunnerError, RunnerResult, TaskRunner};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// Runner that counts starts instead of spawning anything.
pub(crate) struct CountingRunner {
    starts: AtomicUsize,
    completed: AtomicUsize,
    failures_left: AtomicUsize,
    delay: Duration,
}

impl CountingRunner {
    pub(crate) fn new() -> Arc<Self> {
        Self::build(Duration::ZERO, 0)
    }

    pub(crate) fn with_delay(delay: Duration) -> Arc<Self> {
        Self::build(delay, 0)
    }

    pub(crate) fn failing(times: usize) -> Arc<Self> {
        Self::build(Duration::ZERO, times)
    }

    fn build(delay: Duration, failures: usize) -> Arc<Self> {
        Arc::new(Self {
            starts: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(failures),
            delay,
        })
    }

    pub(crate) fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl TaskRunner for CountingRunner {
    fn start(&self) -> RunnerResult<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);

        if self.failures_left.load(Ordering::SeqCst) > 0 {
            self.failures_left.fetch_sub(1, Ordering::SeqCst);
            return Err(RunnerError::spawn(
                "missing-binary".into(),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            ));
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn kill(&self) -> RunnerResult<()> {
        Ok(())
    }
}

/// Call `wait` on a background thread; the receiver fires once it returns.
pub(crate) fn spawn_waiter(notifier: &Notifier) -> Receiver<()> {
    let notifier = notifier.clone();
    let (done_tx, done_rx) = mpsc::channel();
    thread::spawn(move || {
        notifier.wait();
        let _ = done_tx.send(());
    });
    done_rx
}
