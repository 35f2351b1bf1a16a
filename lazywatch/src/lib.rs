pub mod app;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{App, SHUTDOWN_TIMEOUT};
pub use error::{AppError, Result as AppResult};
