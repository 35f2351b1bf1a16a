use crate::{DEFAULT_BACKEND_HOST, DEFAULT_COMMAND, DEFAULT_DIRECTORY, DEFAULT_HEALTH_PATH, DEFAULT_PORTS};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lazywatch")]
#[command(about = "Reverse proxy that restarts your backend when its sources change")]
#[command(version)]
pub struct Cli {
    /// Proxy and backend ports as proxyPort:serverPort
    #[arg(short = 'p', long = "ports", default_value = DEFAULT_PORTS)]
    pub ports: String,

    /// Directory to watch
    #[arg(short = 'd', long = "dir", default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Command that runs the backend
    #[arg(short = 'c', long = "cmd", default_value = DEFAULT_COMMAND)]
    pub command: String,

    /// Path polled on the backend until it answers 200
    #[arg(long, default_value = DEFAULT_HEALTH_PATH)]
    pub health_path: String,

    /// Host the backend listens on
    #[arg(long, default_value = DEFAULT_BACKEND_HOST)]
    pub backend_host: String,

    /// Path component to ignore when watching (repeatable, replaces the defaults)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
