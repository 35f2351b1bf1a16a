//! Recursive source watcher that reports create and modify events.

mod error;
mod filter;
mod watcher;

#[cfg(test)]
mod tests;

pub use error::{Result as WatcherResult, WatcherError};
pub use filter::ChangeFilter;
pub use watcher::SourceWatcher;
