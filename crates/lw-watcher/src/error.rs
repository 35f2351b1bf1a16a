use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Cannot resolve watch directory {path}: {source} {location}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to watch {path}: {source} {location}")]
    Notify {
        path: PathBuf,
        #[source]
        source: notify::Error,
        location: ErrorLocation,
    },
}

impl WatcherError {
    #[track_caller]
    pub(crate) fn directory(path: PathBuf, source: std::io::Error) -> Self {
        Self::Directory {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn notify(path: PathBuf, source: notify::Error) -> Self {
        Self::Notify {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WatcherError>;
