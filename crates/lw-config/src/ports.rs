use crate::{ConfigError, ConfigErrorResult};

use std::fmt;
use std::str::FromStr;

/// The proxy's listen port and the backend's port, given as `proxy:server`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ports {
    pub proxy: u16,
    pub server: u16,
}

impl Ports {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.proxy == 0 || self.server == 0 {
            return Err(ConfigError::ports(format!(
                "ports must be non-zero, got {self}"
            )));
        }

        if self.proxy == self.server {
            return Err(ConfigError::ports(format!(
                "proxy and server ports must differ, got {self}"
            )));
        }

        Ok(())
    }
}

impl FromStr for Ports {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (proxy, server) = s
            .split_once(':')
            .ok_or_else(|| ConfigError::ports(format!("expected proxyPort:serverPort, got '{s}'")))?;

        Ok(Self {
            proxy: parse_port(proxy, s)?,
            server: parse_port(server, s)?,
        })
    }
}

impl fmt::Display for Ports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.proxy, self.server)
    }
}

fn parse_port(part: &str, whole: &str) -> ConfigErrorResult<u16> {
    part.trim()
        .parse()
        .map_err(|e| ConfigError::ports(format!("invalid port '{part}' in '{whole}': {e}")))
}
