use crate::{Cli, ConfigError, ConfigErrorResult, DEFAULT_IGNORE, LoggingConfig, Ports};

use std::net::SocketAddr;
use std::path::PathBuf;

use log::info;
use lw_core::Command;

#[derive(Debug, Clone)]
pub struct Config {
    pub ports: Ports,
    pub directory: PathBuf,
    pub command: Command,
    pub health_path: String,
    pub backend_host: String,
    /// Path components whose changes never invalidate the backend.
    pub ignore: Vec<String>,
    pub logging: LoggingConfig,
}

impl Config {
    /// Build the config from parsed arguments.
    ///
    /// Precedence: command-line flag > `LW_*` environment variable > default.
    /// Does NOT validate - call validate() afterwards.
    pub fn from_cli(cli: Cli) -> ConfigErrorResult<Self> {
        let ports: Ports = cli.ports.parse()?;
        let command = Command::parse(&cli.command)
            .ok_or_else(|| ConfigError::command("command must not be empty"))?;

        let ignore = if cli.ignore.is_empty() {
            DEFAULT_IGNORE.iter().map(|name| name.to_string()).collect()
        } else {
            cli.ignore
        };

        let mut config = Self {
            ports,
            directory: cli.directory,
            command,
            health_path: cli.health_path,
            backend_host: cli.backend_host,
            ignore,
            logging: LoggingConfig::default(),
        };

        config.apply_env_overrides();

        if let Some(level) = cli.log_level {
            Self::apply_parse(&level, &mut config.logging.level);
        }
        if cli.no_color {
            config.logging.colored = false;
        }
        if cli.log_file.is_some() {
            config.logging.file = cli.log_file;
        }

        Ok(config)
    }

    /// Validate all configuration.
    /// Call after from_cli() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.ports.validate()?;

        if !self.directory.is_dir() {
            return Err(ConfigError::config(format!(
                "watch directory {} does not exist",
                self.directory.display()
            )));
        }

        if !self.health_path.starts_with('/') {
            return Err(ConfigError::config(format!(
                "health path must start with '/', got '{}'",
                self.health_path
            )));
        }

        if self.backend_host.trim().is_empty() {
            return Err(ConfigError::config("backend host must not be empty"));
        }

        Ok(())
    }

    /// URL checked until the backend reports ready.
    pub fn health_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.backend_host, self.ports.server, self.health_path
        )
    }

    /// Address the proxy listens on.
    pub fn proxy_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.ports.proxy))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  proxy: :{} -> {}:{}",
            self.ports.proxy, self.backend_host, self.ports.server
        );
        info!("  command: {}", self.command);
        info!("  health: {}", self.health_url());
        info!(
            "  watch: {} (ignoring {})",
            self.directory.display(),
            self.ignore.join(", ")
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_parse("LW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_path("LW_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            Self::apply_parse(&val, target);
        }
    }

    fn apply_env_option_path(var_name: &str, target: &mut Option<PathBuf>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(PathBuf::from(val));
        }
    }

    fn apply_parse<T: std::str::FromStr>(val: &str, target: &mut T) {
        if let Ok(parsed) = val.parse() {
            *target = parsed;
        }
    }
}
