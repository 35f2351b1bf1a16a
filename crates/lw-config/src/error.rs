use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a ports error
    #[track_caller]
    pub fn ports<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Ports",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a command error
    #[track_caller]
    pub fn command<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Command",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
