mod cli;
mod config;
mod error;
mod log_level;
mod logging_config;
mod ports;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use ports::Ports;

const DEFAULT_PORTS: &str = "3001:3000";
const DEFAULT_DIRECTORY: &str = "./";
const DEFAULT_COMMAND: &str = "go run main.go";
const DEFAULT_HEALTH_PATH: &str = "/health";
const DEFAULT_BACKEND_HOST: &str = "localhost";
const DEFAULT_IGNORE: [&str; 2] = [".git", "target"];
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
