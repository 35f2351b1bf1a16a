use std::panic::Location;

use error_location::ErrorLocation;
use nix::errno::Errno;
use nix::unistd::Pid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to spawn backend `{command}`: {source} {location}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to kill process group {pgid}: {source} {location}")]
    KillProcessGroup {
        pgid: Pid,
        #[source]
        source: Errno,
        location: ErrorLocation,
    },

    #[error("Runner stopped before the backend became healthy {location}")]
    Stopped { location: ErrorLocation },
}

impl RunnerError {
    #[track_caller]
    pub(crate) fn spawn(command: String, source: std::io::Error) -> Self {
        Self::Spawn {
            command,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn kill_process_group(pgid: Pid, source: Errno) -> Self {
        Self::KillProcessGroup {
            pgid,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn stopped() -> Self {
        Self::Stopped {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether a later signal may succeed where this one failed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Stopped { .. })
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
