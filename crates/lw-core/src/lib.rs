//! Restart and readiness synchronization for lazywatch.
//!
//! A [`Coordinator`] serializes change notifications and backend restarts,
//! [`Notifier`] handles let proxied requests wait for the next resolution,
//! and a [`CommandRunner`] owns the backend process group.

mod command;
mod coordinator;
mod error;
mod events;
mod health;
mod monitor;
mod notifier;
mod runner;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use coordinator::Coordinator;
pub use error::{Result as RunnerResult, RunnerError};
pub use events::{EventReceiver, EventSender, Signal, channel};
pub use health::{HealthChecker, HttpHealthChecker};
pub use notifier::{Notifier, Waiter};
pub use runner::{CommandRunner, HEALTH_POLL_INTERVAL, TaskRunner};
