use lazywatch::{App, AppResult, logger};
use lw_config::{Cli, Config};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::signal::unix::{SignalKind, signal};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<()> {
    // Load and validate configuration
    let config = Config::from_cli(Cli::parse())?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.logging.file.clone(),
        config.logging.colored,
    )?;

    info!("Starting lazywatch v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::bind(config).await?;
    info!("Listening on {}", app.local_addr()?);

    app.serve(shutdown_signal()).await
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => Some(stream),
        Err(e) => {
            error!("Failed to listen for SIGTERM: {}", e);
            None
        }
    };

    let sigterm = async {
        match terminate.as_mut() {
            Some(stream) => {
                stream.recv().await;
            }
            None => std::future::pending::<()>().await,
        }
    };

    let sigint = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = sigint => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        () = sigterm => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
