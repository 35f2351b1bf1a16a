use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] lw_config::ConfigError),

    #[error("Watcher error: {0}")]
    Watcher(#[from] lw_watcher::WatcherError),

    #[error("Failed to bind proxy on {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Proxy server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AppError>;
