use crate::error::{AppError, Result as AppErrorResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: lw_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| AppError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

        Dispatch::new().format(plain).chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        Dispatch::new().format(plain).chain(std::io::stdout())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={level_filter}, file={}", path.display()),
        None => info!("Logger initialized: level={level_filter}, stdout"),
    }

    Ok(())
}

fn plain(out: FormatCallback, message: &std::fmt::Arguments, record: &Record) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
